//! Tab edge generation
//!
//! Male tab creation is complicated by kerf. The joint is a sequence of tabs
//! and spaces with perpendicular shifts between them. Tab and space lengths
//! are adjusted by the kerf, the depth is not: tabs are cut one kerf longer
//! and interior spaces one kerf shorter, since the kerf narrows every tab.
//! Spaces at either end of the edge only touch a cut on one side and keep the
//! planned segment length.

use crate::error::{JointError, JointResult};
use crate::planner::{SegmentKind, SegmentPlan, MIN_LENGTH};
use quickjoint_core::{offset_along, offset_perpendicular, Edge, Path, Point};
use tracing::trace;

/// Build the path that replaces `edge` with tabs.
///
/// The first command is a `MoveTo` at the edge start when `starts_subpath`,
/// otherwise a `LineTo`, so the result can stand in for the original edge
/// command. A trailing `ClosePath` is added when the edge closes its subpath.
pub fn generate_tabs(
    edge: &Edge,
    starts_subpath: bool,
    plan: &SegmentPlan,
) -> JointResult<Path> {
    let kerf = plan.kerf_width;
    let segment = plan.segment_vector;

    let has_interior_space = plan
        .segments()
        .any(|(i, kind)| kind == SegmentKind::Space && !plan.is_end_segment(i));
    let space_length = plan.segment_length() - kerf;
    if has_interior_space && space_length <= MIN_LENGTH {
        return Err(JointError::KerfExceedsSegment {
            feature: "space",
            kerf,
            length: space_length,
        });
    }

    // Parallel portions of tab, space and end space.
    let tab_line = offset_along(segment, segment, kerf)?;
    let space_line = if has_interior_space {
        offset_along(segment, segment, -kerf)?
    } else {
        segment
    };
    let end_space_line = segment;

    // Perpendicular away from and back towards the baseline.
    let direction = edge.vector();
    let thickness = plan.material_thickness;
    let tab_out = offset_perpendicular(Point::ZERO, direction, thickness, !plan.flip_side)?;
    let tab_in = offset_perpendicular(Point::ZERO, direction, thickness, plan.flip_side)?;

    let mut path = Path::with_capacity(plan.segment_count * 3 + 2);
    let mut cursor = edge.start;
    if starts_subpath {
        path.move_to(cursor);
    } else {
        path.line_to(cursor);
    }

    for (i, kind) in plan.segments() {
        match kind {
            SegmentKind::Feature => {
                trace!(index = i, "tab");
                cursor += tab_out;
                path.line_to(cursor);
                cursor += tab_line;
                path.line_to(cursor);
                cursor += tab_in;
                path.line_to(cursor);
            }
            SegmentKind::Space if plan.is_end_segment(i) => {
                trace!(index = i, "end space");
                cursor += end_space_line;
                path.line_to(cursor);
            }
            SegmentKind::Space => {
                trace!(index = i, "space");
                cursor += space_line;
                path.line_to(cursor);
            }
        }
    }

    if edge.closes_path {
        path.close();
    }

    Ok(path)
}
