//! Joint Maker
//!
//! Entry point for hosts: validates a parameter set once and then turns any
//! number of edges into tab paths or slot shapes.

use crate::error::JointResult;
use crate::params::{JointKind, JointParameters};
use crate::planner::{plan, SegmentPlan};
use crate::sink::{ShapeId, ShapeSink};
use crate::slots::generate_slot_boxes;
use crate::tabs::generate_tabs;
use quickjoint_core::{Edge, Path};
use tracing::debug;

/// Result of [`JointMaker::generate`].
#[derive(Debug, Clone, PartialEq)]
pub enum JointOutput {
    /// Replacement for the input edge.
    Tabs(Path),
    /// Ids of the slot shapes handed to the sink, in edge order.
    Slots(Vec<ShapeId>),
}

#[derive(Debug, Clone)]
pub struct JointMaker {
    params: JointParameters,
}

impl JointMaker {
    pub fn new(params: JointParameters) -> JointResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &JointParameters {
        &self.params
    }

    /// Segment layout for `edge` under these parameters.
    pub fn plan(&self, edge: &Edge) -> JointResult<SegmentPlan> {
        plan(edge, &self.params)
    }

    /// Path that replaces `edge` with tabs.
    pub fn tab_edge(&self, edge: &Edge, starts_subpath: bool) -> JointResult<Path> {
        let plan = self.plan(edge)?;
        generate_tabs(edge, starts_subpath, &plan)
    }

    /// Closed slot rectangles along `edge`.
    pub fn slot_boxes(&self, edge: &Edge) -> JointResult<Vec<Path>> {
        let plan = self.plan(edge)?;
        generate_slot_boxes(edge, &plan)
    }

    /// Generate the slots for `edge` and pass each one to `sink`.
    ///
    /// Nothing reaches the sink unless every slot could be built.
    pub fn emit_slots<S: ShapeSink + ?Sized>(
        &self,
        edge: &Edge,
        sink: &mut S,
    ) -> JointResult<Vec<ShapeId>> {
        let boxes = self.slot_boxes(edge)?;
        Ok(boxes.into_iter().map(|rect| sink.emit_shape(rect)).collect())
    }

    /// Produce either half of the joint for `edge`.
    ///
    /// `starts_subpath` only matters for tabs; `sink` is only used for slots.
    pub fn generate<S: ShapeSink + ?Sized>(
        &self,
        kind: JointKind,
        edge: &Edge,
        starts_subpath: bool,
        sink: &mut S,
    ) -> JointResult<JointOutput> {
        debug!(
            %kind,
            features = self.params.feature_count,
            start = %edge.start,
            end = %edge.end,
            "generating joint"
        );
        match kind {
            JointKind::TabEdge => self.tab_edge(edge, starts_subpath).map(JointOutput::Tabs),
            JointKind::SlotBox => self.emit_slots(edge, sink).map(JointOutput::Slots),
        }
    }
}
