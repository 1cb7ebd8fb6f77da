//! Host hook for emitted shapes
//!
//! Slot boxes become new sibling shapes in the host document. The generators
//! never touch the document; they hand each closed path to a [`ShapeSink`],
//! which owns identifier allocation and styling.

use quickjoint_core::Path;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the host assigned to an emitted shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub String);

impl ShapeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Receives each shape produced by a generator.
///
/// Implementations must hand out unique ids, including across sinks used
/// from several threads at once.
pub trait ShapeSink {
    fn emit_shape(&mut self, path: Path) -> ShapeId;
}

/// Sink that keeps every shape in memory, numbering ids with a prefix.
#[derive(Debug, Clone)]
pub struct CollectingSink {
    prefix: String,
    shapes: Vec<(ShapeId, Path)>,
}

impl CollectingSink {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            shapes: Vec::new(),
        }
    }

    pub fn shapes(&self) -> &[(ShapeId, Path)] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<(ShapeId, Path)> {
        self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Default for CollectingSink {
    fn default() -> Self {
        Self::new("slot")
    }
}

impl ShapeSink for CollectingSink {
    fn emit_shape(&mut self, path: Path) -> ShapeId {
        let id = ShapeId(format!("{}{}", self.prefix, self.shapes.len() + 1));
        self.shapes.push((id.clone(), path));
        id
    }
}
