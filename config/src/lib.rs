//! # Config Crate
//!
//! Centralized configuration constants for connector and container
//! composition. Numeric tolerances, the canonical origin frame and the
//! parameters of the connector debug visualization are defined here so the
//! library crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, DIRECTION_ARROW_LENGTH, ORIGIN_DIRECTION};
//!
//! // The canonical origin faces +Y.
//! assert_eq!(ORIGIN_DIRECTION, [0.0, 1.0, 0.0]);
//!
//! // Floating-point comparisons go through the shared tolerance.
//! assert!(approx_equal(DIRECTION_ARROW_LENGTH, 50.0 + 1e-12));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **OpenSCAD Compatible**: Colors and matrices use OpenSCAD conventions

pub mod constants;

#[cfg(test)]
mod tests;
