//! Type definitions for joint generation

use crate::error::{JointError, JointResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on tabs or slots per edge.
pub const MAX_FEATURE_COUNT: u32 = 10_000;

/// Which half of a finger joint to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointKind {
    /// Replace the edge with a tab/space zig-zag.
    TabEdge = 0,
    /// Cut rectangular slots beside the edge.
    SlotBox = 1,
}

impl fmt::Display for JointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JointKind::TabEdge => write!(f, "tabs"),
            JointKind::SlotBox => write!(f, "slots"),
        }
    }
}

/// Joint parameters, all lengths in path coordinate units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointParameters {
    /// Number of tabs or slots along the edge
    pub feature_count: u32,
    /// Perpendicular depth of each tab or slot
    pub material_thickness: f64,
    /// Width of material removed by the cutter
    pub kerf_width: f64,
    /// Draw tabs on the other side of the edge (slots move the opposite way)
    #[serde(default)]
    pub flip_side: bool,
    /// The first segment is a feature instead of a space
    #[serde(default)]
    pub feature_at_start: bool,
    /// The last segment is a feature instead of a space
    #[serde(default)]
    pub feature_at_end: bool,
}

impl Default for JointParameters {
    fn default() -> Self {
        Self {
            feature_count: 1,
            material_thickness: 3.0,
            kerf_width: 0.14,
            flip_side: false,
            feature_at_start: false,
            feature_at_end: false,
        }
    }
}

impl JointParameters {
    pub fn new(feature_count: u32, material_thickness: f64, kerf_width: f64) -> Self {
        Self {
            feature_count,
            material_thickness,
            kerf_width,
            ..Self::default()
        }
    }

    /// Set both edge-feature flags at once.
    pub fn with_edge_features(mut self, enabled: bool) -> Self {
        self.feature_at_start = enabled;
        self.feature_at_end = enabled;
        self
    }

    pub fn with_flip_side(mut self, flip: bool) -> Self {
        self.flip_side = flip;
        self
    }

    /// Check ranges that do not depend on the edge being cut.
    pub fn validate(&self) -> JointResult<()> {
        if self.feature_count < 1 {
            return Err(JointError::invalid(
                "feature_count",
                "must be at least 1",
            ));
        }

        if self.feature_count > MAX_FEATURE_COUNT {
            return Err(JointError::invalid(
                "feature_count",
                format!(
                    "{} exceeds the limit of {}",
                    self.feature_count, MAX_FEATURE_COUNT
                ),
            ));
        }

        if !self.material_thickness.is_finite() || self.material_thickness <= 0.0 {
            return Err(JointError::invalid(
                "material_thickness",
                format!("must be positive, got {}", self.material_thickness),
            ));
        }

        if !self.kerf_width.is_finite() || self.kerf_width < 0.0 {
            return Err(JointError::invalid(
                "kerf_width",
                format!("must be zero or positive, got {}", self.kerf_width),
            ));
        }

        Ok(())
    }
}
