//! Error types for joint generation.
//!
//! Every failure is detected before any geometry is produced, so a caller
//! either gets a complete path or one of these errors.

use quickjoint_core::{GeometryError, Point};
use thiserror::Error;

/// Errors that can occur while planning or generating a joint.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JointError {
    /// A joint parameter is out of its valid range.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The edge has no usable direction.
    #[error("Degenerate edge from {start} to {end}")]
    DegenerateEdge {
        /// The edge start point.
        start: Point,
        /// The edge end point.
        end: Point,
    },

    /// The kerf consumes all of a segment, space or slot dimension.
    #[error("Kerf {kerf} leaves no material for the {feature}: {length}")]
    KerfExceedsSegment {
        /// Which dimension collapsed ("edge", "segment", "space", ...).
        feature: &'static str,
        /// The kerf width in use.
        kerf: f64,
        /// The resulting, non-positive length.
        length: f64,
    },

    /// A vector operation failed on otherwise validated input.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

impl JointError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        JointError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type alias for joint operations.
pub type JointResult<T> = Result<T, JointError>;
