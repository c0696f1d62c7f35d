//! # Connector Errors
//!
//! Error types for connector propagation and container construction.
//!
//! ## Error Policy
//!
//! - Malformed output declarations fail immediately with no partial result
//! - Degenerate vectors are left to glam (NaN propagation), not validated here

use thiserror::Error;

/// Errors that can occur while placing containers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConnectorError {
    /// A declared structure contains a value that cannot be transformed.
    ///
    /// `path` locates the offending leaf, e.g. `slots[2].tip`.
    #[error("Unsupported type '{type_name}' at '{path}'")]
    UnsupportedType {
        /// Name of the rejected value type.
        type_name: &'static str,
        /// Location of the value inside the declaration.
        path: String,
    },

    /// A connector used to build a rotation has no up vector.
    #[error("Connector '{frame}' has no up vector to fix its roll")]
    MissingUp {
        /// Which frame is missing it (`origin` or `position`).
        frame: &'static str,
    },

    /// The raw input handed to a part could not be resolved to a pose.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ConnectorError {
    /// Creates an unsupported type error.
    pub fn unsupported(type_name: &'static str, path: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name,
            path: path.into(),
        }
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result type alias for connector operations.
pub type ConnectorResult<T> = Result<T, ConnectorError>;

// =============================================================================
// TESTS
// =============================================================================
