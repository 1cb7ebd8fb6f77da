//! SVG output for slot shapes
//!
//! Each slot becomes its own `<g>` group holding one hairline path, the same
//! layout a vector editor shows when a slot is added as a separate object.

use quickjoint_core::{convert, LengthUnit, Path};
use quickjoint_joints::{ShapeId, ShapeSink};
use std::collections::HashSet;
use tracing::debug;

const ID_PREFIX: &str = "slot";
const HAIRLINE_MM: f64 = 0.1;

/// [`ShapeSink`] that renders every shape as an SVG group.
#[derive(Debug, Clone)]
pub struct SvgShapeSink {
    stroke_width: f64,
    taken: HashSet<String>,
    next_index: usize,
    groups: Vec<String>,
}

impl SvgShapeSink {
    /// Sink for a document whose user unit is `document_unit`.
    pub fn new(document_unit: LengthUnit) -> Self {
        Self {
            stroke_width: convert(HAIRLINE_MM, LengthUnit::Mm, document_unit),
            taken: HashSet::new(),
            next_index: 1,
            groups: Vec::new(),
        }
    }

    /// Mark ids already present in the document so they are never reused.
    pub fn with_reserved_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.taken.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn style(&self) -> String {
        format!(
            "stroke:#000000;fill:none;stroke-width:{}",
            self.stroke_width
        )
    }

    /// Rendered groups, in emission order.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// All groups joined into one fragment, one per line.
    pub fn fragment(&self) -> String {
        self.groups.join("\n")
    }

    fn allocate_id(&mut self) -> String {
        loop {
            let candidate = format!("{}{}", ID_PREFIX, self.next_index);
            self.next_index += 1;
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

impl ShapeSink for SvgShapeSink {
    fn emit_shape(&mut self, path: Path) -> ShapeId {
        let id = self.allocate_id();
        let group = format!(
            r#"<g id="{id}"><path style="{style}" id="{id}-inner-close-tab" d="{path}"/></g>"#,
            id = id,
            style = self.style(),
            path = path,
        );
        debug!(%id, "emitted slot shape");
        self.groups.push(group);
        ShapeId(id)
    }
}
