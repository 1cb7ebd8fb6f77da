//! Segment planner
//!
//! Splits an edge into alternating feature and space segments. Both the tab
//! and the slot generator take their counts and lengths from here.
//!
//! The edge is first shortened by one kerf width and then divided evenly.
//! Tabs add the kerf back (each tab is cut one kerf wider, each interior space
//! one kerf narrower), so a tab edge still spans exactly the original edge.
//! Slots start half a kerf in from the edge start so the shortened span sits
//! centred on the nominal edge.

use crate::error::{JointError, JointResult};
use crate::params::JointParameters;
use quickjoint_core::geometry::DIRECTION_EPSILON;
use quickjoint_core::{offset_along, Edge, Point};
use tracing::debug;

/// Lengths at or below this are treated as collapsed.
pub const MIN_LENGTH: f64 = 1e-9;

/// Role of one segment along the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Feature,
    Space,
}

/// Derived layout of one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPlan {
    /// Features plus spaces along the edge.
    pub segment_count: usize,
    /// Parallel displacement of one segment after kerf compensation.
    pub segment_vector: Point,
    /// Edge start nudged half a kerf along the edge.
    pub start_cursor: Point,
    /// Kerf width the plan was made for.
    pub kerf_width: f64,
    /// Perpendicular depth of each tab or slot.
    pub material_thickness: f64,
    /// Tabs go on the other side of the edge, slots on this one.
    pub flip_side: bool,
    /// Whether segment 0 is a feature.
    pub feature_at_start: bool,
}

impl SegmentPlan {
    /// Length of [`Self::segment_vector`].
    pub fn segment_length(&self) -> f64 {
        self.segment_vector.magnitude()
    }

    /// Feature/space role of the segment at `index`.
    pub fn kind_at(&self, index: usize) -> SegmentKind {
        if (index % 2 == 0) == self.feature_at_start {
            SegmentKind::Feature
        } else {
            SegmentKind::Space
        }
    }

    /// Every segment in order with its role.
    pub fn segments(&self) -> impl Iterator<Item = (usize, SegmentKind)> + '_ {
        (0..self.segment_count).map(move |i| (i, self.kind_at(i)))
    }

    /// The first or last segment.
    pub fn is_end_segment(&self, index: usize) -> bool {
        index == 0 || index + 1 == self.segment_count
    }

    pub fn feature_count(&self) -> usize {
        self.segments()
            .filter(|(_, kind)| *kind == SegmentKind::Feature)
            .count()
    }
}

/// Number of segments for `feature_count` features and the edge-feature flags.
///
/// `feature_count * 2 - 1` segments hold the features and the spaces between
/// them; each end that is not itself a feature adds one more space.
pub fn segment_count(
    feature_count: u32,
    feature_at_start: bool,
    feature_at_end: bool,
) -> JointResult<usize> {
    if feature_count < 1 {
        return Err(JointError::invalid("feature_count", "must be at least 1"));
    }

    let count = i64::from(feature_count) * 2 - 1
        + i64::from(!feature_at_start)
        + i64::from(!feature_at_end);

    if count <= 0 {
        return Err(JointError::invalid(
            "feature_count",
            format!("derived segment count {} is not positive", count),
        ));
    }

    usize::try_from(count).map_err(|_| {
        JointError::invalid(
            "feature_count",
            format!("segment count {} does not fit in memory", count),
        )
    })
}

/// Plan the segments of `edge`.
pub fn plan(edge: &Edge, params: &JointParameters) -> JointResult<SegmentPlan> {
    params.validate()?;

    if !edge.start.is_finite() || !edge.end.is_finite() {
        return Err(JointError::DegenerateEdge {
            start: edge.start,
            end: edge.end,
        });
    }

    let vector = edge.vector();
    let length = vector.magnitude();
    if length <= DIRECTION_EPSILON {
        return Err(JointError::DegenerateEdge {
            start: edge.start,
            end: edge.end,
        });
    }

    let count = segment_count(
        params.feature_count,
        params.feature_at_start,
        params.feature_at_end,
    )?;

    let kerf = params.kerf_width;
    let usable = length - kerf;
    if usable <= MIN_LENGTH {
        return Err(JointError::KerfExceedsSegment {
            feature: "edge",
            kerf,
            length: usable,
        });
    }

    let segment_length = usable / count as f64;
    if segment_length <= MIN_LENGTH {
        return Err(JointError::KerfExceedsSegment {
            feature: "segment",
            kerf,
            length: segment_length,
        });
    }

    let compensated = offset_along(vector, vector, -kerf)?;
    let segment_vector = compensated / count as f64;
    let start_cursor = offset_along(edge.start, vector, kerf / 2.0)?;

    debug!(
        segment_count = count,
        edge_length = length,
        segment_length,
        kerf,
        "planned joint segments"
    );

    Ok(SegmentPlan {
        segment_count: count,
        segment_vector,
        start_cursor,
        kerf_width: kerf,
        material_thickness: params.material_thickness,
        flip_side: params.flip_side,
        feature_at_start: params.feature_at_start,
    })
}
