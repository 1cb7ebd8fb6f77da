//! # QuickJoint Joints
//!
//! Finger-joint geometry for laser-cut panels. A straight edge plus a set of
//! [`JointParameters`] becomes either a zig-zag of tabs that replaces the edge,
//! or a row of rectangular slots cut beside a reference edge.
//!
//! ## Building blocks
//!
//! - **Planner**: segment count, kerf-compensated segment vector and start cursor
//! - **Tab Edge**: alternating tab/space path spliced in place of the edge
//! - **Slot Box**: independent closed rectangles at every feature position
//! - **Shape Sink**: the host hook that receives each emitted slot
//!
//! [`JointMaker`] validates parameters once and dispatches on [`JointKind`].

pub mod error;
pub mod maker;
pub mod params;
pub mod planner;
pub mod sink;
pub mod slots;
pub mod tabs;

pub use error::{JointError, JointResult};
pub use maker::{JointMaker, JointOutput};
pub use params::{JointKind, JointParameters, MAX_FEATURE_COUNT};
pub use planner::{plan, segment_count, SegmentPlan};
pub use sink::{CollectingSink, ShapeId, ShapeSink};
pub use slots::generate_slot_boxes;
pub use tabs::generate_tabs;
