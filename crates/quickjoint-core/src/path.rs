//! Edges and draw-instruction paths
//!
//! An [`Edge`] is the single straight segment a host hands to the joint
//! generators. A [`Path`] is the ordered list of absolute draw instructions
//! they hand back.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One straight edge taken from a host path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
    /// The edge runs from the last node back to the subpath's first node.
    #[serde(default)]
    pub closes_path: bool,
}

impl Edge {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            closes_path: false,
        }
    }

    /// An edge that returns to the start of its subpath.
    pub fn closing(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            closes_path: true,
        }
    }

    /// Displacement from start to end.
    pub fn vector(&self) -> Point {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.vector().magnitude()
    }
}

/// A single absolute draw instruction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ClosePath,
}

impl PathCommand {
    /// The target point, `None` for [`PathCommand::ClosePath`].
    pub fn point(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::ClosePath => None,
        }
    }
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y),
            PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y),
            PathCommand::ClosePath => write!(f, "Z"),
        }
    }
}

/// An ordered sequence of draw instructions.
///
/// `Display` renders SVG path data, e.g. `M 0 0 L 10 0 Z`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::ClosePath))
    }

    /// Every point visited, in order, skipping close instructions.
    pub fn points(&self) -> Vec<Point> {
        self.commands.iter().filter_map(PathCommand::point).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }
}

impl From<Vec<PathCommand>> for Path {
    fn from(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}
