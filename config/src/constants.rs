//! # Configuration Constants
//!
//! Centralized constants for connector composition.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Origin Frame**: Canonical pose shared by every part type
//! - **Visualization**: Arrow dimensions used to draw connectors
//! - **Colors**: Named RGBA colors

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Rigid transforms built from look-at bases accumulate rounding error of a
/// few ulps; this tolerance absorbs that noise when comparing poses.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// ORIGIN FRAME CONSTANTS
// =============================================================================

/// Position of the canonical origin connector.
pub const ORIGIN_POSITION: [f64; 3] = [0.0, 0.0, 0.0];

/// Direction of the canonical origin connector (+Y).
///
/// Parts are authored so that their input attachment faces along this axis.
///
/// # Example
///
/// ```rust
/// use config::constants::{ORIGIN_DIRECTION, ORIGIN_UP};
///
/// // Direction and up must be orthogonal for the look-at basis.
/// let dot: f64 = ORIGIN_DIRECTION.iter().zip(ORIGIN_UP.iter()).map(|(a, b)| a * b).sum();
/// assert_eq!(dot, 0.0);
/// ```
pub const ORIGIN_DIRECTION: [f64; 3] = [0.0, 1.0, 0.0];

/// Up vector of the canonical origin connector (+Z).
pub const ORIGIN_UP: [f64; 3] = [0.0, 0.0, 1.0];

// =============================================================================
// VISUALIZATION CONSTANTS
// =============================================================================

/// Length of the arrow drawn along a connector's direction.
pub const DIRECTION_ARROW_LENGTH: f64 = 50.0;

/// Shaft radius of the direction arrow.
pub const DIRECTION_ARROW_RADIUS: f64 = 3.0;

/// Length of the arrow drawn along a connector's up vector.
pub const UP_ARROW_LENGTH: f64 = 20.0;

/// Shaft radius of the up arrow.
pub const UP_ARROW_RADIUS: f64 = 2.0;

/// Arrow head radius as a multiple of the shaft radius.
///
/// # Example
///
/// ```rust
/// use config::constants::{ARROW_HEAD_RADIUS_FACTOR, DIRECTION_ARROW_RADIUS};
///
/// let head_radius = DIRECTION_ARROW_RADIUS * ARROW_HEAD_RADIUS_FACTOR;
/// assert_eq!(head_radius, 4.5);
/// ```
pub const ARROW_HEAD_RADIUS_FACTOR: f64 = 1.5;

/// Arrow head length as a multiple of the shaft radius.
pub const ARROW_HEAD_LENGTH_FACTOR: f64 = 3.0;

/// Fragment count ($fn) for arrow cylinders and cones.
///
/// Arrows are a debugging aid, so a coarse tessellation is enough.
pub const ARROW_SEGMENTS: u32 = 12;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Red, used for connector direction arrows.
///
/// RGBA values in range [0.0, 1.0].
pub const RED: [f64; 4] = [1.0, 0.0, 0.0, 1.0];

/// Green, used for connector up arrows.
pub const GREEN: [f64; 4] = [0.0, 1.0, 0.0, 1.0];

// =============================================================================
// CONNECTOR STYLE
// =============================================================================

/// Immutable snapshot of the parameters used to draw a connector.
///
/// # Examples
/// ```
/// use config::constants::ConnectorStyle;
/// let style = ConnectorStyle::default();
/// assert_eq!(style.direction_length, 50.0);
/// assert_eq!(style.up_length, 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorStyle {
    /// Length of the direction arrow.
    pub direction_length: f64,
    /// Shaft radius of the direction arrow.
    pub direction_radius: f64,
    /// Length of the up arrow.
    pub up_length: f64,
    /// Shaft radius of the up arrow.
    pub up_radius: f64,
    /// Fragment count for arrow cylinders.
    pub segments: u32,
}

impl ConnectorStyle {
    /// Builds a style, rejecting non-positive dimensions and segment counts
    /// too small to form a polygon.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, ConnectorStyle};
    /// let style = ConnectorStyle::new(10.0, 1.0, 5.0, 0.5, 8).expect("valid style");
    /// assert_eq!(style.segments, 8);
    ///
    /// let err = ConnectorStyle::new(0.0, 1.0, 5.0, 0.5, 8).unwrap_err();
    /// assert_eq!(err, ConfigError::NonPositive("direction_length", 0.0));
    /// ```
    pub fn new(
        direction_length: f64,
        direction_radius: f64,
        up_length: f64,
        up_radius: f64,
        segments: u32,
    ) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("direction_length", direction_length),
            ("direction_radius", direction_radius),
            ("up_length", up_length),
            ("up_radius", up_radius),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive(name, value));
            }
        }
        if segments < 3 {
            return Err(ConfigError::InvalidSegments(segments));
        }
        Ok(Self {
            direction_length,
            direction_radius,
            up_length,
            up_radius,
            segments,
        })
    }
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            direction_length: DIRECTION_ARROW_LENGTH,
            direction_radius: DIRECTION_ARROW_RADIUS,
            up_length: UP_ARROW_LENGTH,
            up_radius: UP_ARROW_RADIUS,
            segments: ARROW_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a length or radius is zero, negative or NaN.
    NonPositive(&'static str, f64),
    /// Raised when the requested segment count is too small to form a polygon.
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive(name, value) => {
                write!(f, "{name} must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(f, "segments must be >= 3: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

#[cfg(test)]
mod tests;
