//! Error types for the core crate.
//!
//! Geometry errors cover vector operations whose result would be undefined,
//! unit errors cover parsing of user supplied lengths.

use thiserror::Error;

/// Errors raised by vector and path operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A non-zero step was requested along a zero-length direction.
    #[error("Cannot step {distance} along a zero-length direction")]
    ZeroDirection {
        /// The requested step distance.
        distance: f64,
    },

    /// A coordinate is NaN or infinite.
    #[error("Non-finite coordinate ({x}, {y})")]
    NonFinite {
        /// The x coordinate.
        x: f64,
        /// The y coordinate.
        y: f64,
    },
}

/// Errors raised while parsing or converting lengths.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// The unit name is not recognised.
    #[error("Unknown length unit: {0}")]
    UnknownUnit(String),

    /// The length text could not be parsed.
    #[error("Invalid length '{input}': {reason}")]
    InvalidLength {
        /// The text that failed to parse.
        input: String,
        /// Why parsing failed.
        reason: String,
    },
}

/// Result type alias for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Result type alias for unit operations.
pub type UnitResult<T> = Result<T, UnitError>;
