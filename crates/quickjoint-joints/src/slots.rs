//! Slot box generation
//!
//! Female slots are independent closed rectangles laid out along a reference
//! edge that is itself left untouched. Tabs need to be made larger by the
//! kerf, slots narrower instead, since the kerf widens them. Each rectangle
//! is shrunk by one kerf in both directions and then moved half a kerf along
//! and across the edge so it stays centred on its nominal footprint.

use crate::error::{JointError, JointResult};
use crate::planner::{SegmentKind, SegmentPlan, MIN_LENGTH};
use quickjoint_core::{offset_along, offset_perpendicular, Edge, Path, Point};
use tracing::trace;

/// Build one closed rectangle per feature segment of `plan`.
///
/// Every rectangle is `MoveTo`, three `LineTo`, `ClosePath`; the close draws
/// the fourth side. Slots sit on the side opposite to the tabs produced with
/// the same `flip_side`.
pub fn generate_slot_boxes(
    edge: &Edge,
    plan: &SegmentPlan,
) -> JointResult<Vec<Path>> {
    let kerf = plan.kerf_width;
    let length_vector = plan.segment_vector;

    let slot_length = plan.segment_length() - kerf;
    if slot_length <= MIN_LENGTH {
        return Err(JointError::KerfExceedsSegment {
            feature: "slot",
            kerf,
            length: slot_length,
        });
    }

    let slot_depth = plan.material_thickness - kerf;
    if slot_depth <= MIN_LENGTH {
        return Err(JointError::KerfExceedsSegment {
            feature: "slot depth",
            kerf,
            length: slot_depth,
        });
    }

    let direction = edge.vector();
    let height_edge = offset_perpendicular(Point::ZERO, direction, slot_depth, plan.flip_side)?;
    let length_edge = offset_along(length_vector, length_vector, -kerf)?;
    let nudge = offset_along(Point::ZERO, length_vector, kerf / 2.0)?
        + offset_perpendicular(Point::ZERO, direction, kerf / 2.0, plan.flip_side)?;

    let mut boxes = Vec::with_capacity(plan.feature_count());
    let mut position = plan.start_cursor;

    for (i, kind) in plan.segments() {
        if kind == SegmentKind::Feature {
            trace!(index = i, "slot");
            let mut cursor = position + nudge;
            let mut rect = Path::with_capacity(5);
            rect.move_to(cursor);
            cursor += length_edge;
            rect.line_to(cursor);
            cursor += height_edge;
            rect.line_to(cursor);
            cursor -= length_edge;
            rect.line_to(cursor);
            rect.close();
            boxes.push(rect);
        }
        position += length_vector;
    }

    Ok(boxes)
}
