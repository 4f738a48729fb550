//! Render surface: a retained, two-layer SVG model.
//!
//! The construction layer holds transient guides (rays mid-construction,
//! auxiliary arcs, instrument glyphs); the final layer holds elements that
//! persist to the end of the lesson (rings, orchestra disk, labels). Every
//! element is registered under a [`ShapeId`], so removal is a lookup+delete;
//! callers never hold raw references into the tree.
//!
//! Serialization order is background → construction → final, so persistent
//! shapes always render above transient guides.

use crate::float_types::Real;
use nalgebra::Point2;
use svg::Document;
use svg::node::element as el;

/// Handle to one element on the surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ShapeId(u64);

/// Which ownership domain an element belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Layer {
    /// Transient guides, cleared wholesale by exploration and pruned
    /// per-element by the animation director.
    Construction,
    /// Persistent shapes, appended-to only; cleared only on full reset.
    Final,
}

/// Geometry of one drawable element.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle { center: Point2<Real>, radius: Real },
    Line { from: Point2<Real>, to: Point2<Real> },
    Path { d: String },
    Label { anchor: Point2<Real>, text: String },
}

/// Presentation attributes of one drawable element.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub stroke: Option<String>,
    pub stroke_width: Real,
    pub fill: Option<String>,
    pub opacity: Real,
    pub dashed: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: Some("#000000".into()),
            stroke_width: 1.5,
            fill: None,
            opacity: 1.0,
            dashed: false,
        }
    }
}

impl Style {
    pub fn stroke(color: &str) -> Self {
        Self {
            stroke: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn filled(color: &str) -> Self {
        Self {
            stroke: None,
            fill: Some(color.into()),
            ..Self::default()
        }
    }

    pub fn width(mut self, w: Real) -> Self {
        self.stroke_width = w;
        self
    }

    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    pub fn opacity(mut self, o: Real) -> Self {
        self.opacity = o;
        self
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: ShapeId,
    shape: Shape,
    style: Style,
    /// Stroke-reveal progress in `[0, 1]`; serialized via the `pathLength`
    /// dash trick while `< 1`.
    reveal: Real,
}

/// The SVG canvas both replay modes draw into.
#[derive(Debug)]
pub struct RenderSurface {
    width: Real,
    height: Real,
    next_id: u64,
    construction: Vec<Entry>,
    final_layer: Vec<Entry>,
}

impl RenderSurface {
    pub fn new(width: Real, height: Real) -> Self {
        Self {
            width,
            height,
            next_id: 0,
            construction: Vec::new(),
            final_layer: Vec::new(),
        }
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut Vec<Entry> {
        match layer {
            Layer::Construction => &mut self.construction,
            Layer::Final => &mut self.final_layer,
        }
    }

    /// Add a fully-revealed element; returns its handle.
    pub fn push(&mut self, layer: Layer, shape: Shape, style: Style) -> ShapeId {
        self.push_with_reveal(layer, shape, style, 1.0)
    }

    /// Add an element with an initial stroke-reveal progress.
    pub fn push_with_reveal(
        &mut self,
        layer: Layer,
        shape: Shape,
        style: Style,
        reveal: Real,
    ) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.layer_mut(layer).push(Entry {
            id,
            shape,
            style,
            reveal: reveal.clamp(0.0, 1.0),
        });
        id
    }

    fn entry_mut(&mut self, id: ShapeId) -> Option<&mut Entry> {
        self.construction
            .iter_mut()
            .chain(self.final_layer.iter_mut())
            .find(|e| e.id == id)
    }

    /// True while `id` is still on the surface.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.construction
            .iter()
            .chain(self.final_layer.iter())
            .any(|e| e.id == id)
    }

    /// Remove one element. Returns `false` (a no-op) if the handle is stale;
    /// this is what makes stop/teardown safe while a timed action is pending.
    pub fn remove(&mut self, id: ShapeId) -> bool {
        let before = self.construction.len() + self.final_layer.len();
        self.construction.retain(|e| e.id != id);
        self.final_layer.retain(|e| e.id != id);
        before != self.construction.len() + self.final_layer.len()
    }

    /// Replace the geometry behind `id` (instrument glyphs move this way).
    /// No-op on a stale handle.
    pub fn update_shape(&mut self, id: ShapeId, shape: Shape) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.shape = shape;
                true
            },
            None => false,
        }
    }

    /// Set stroke-reveal progress. No-op on a stale handle.
    pub fn set_reveal(&mut self, id: ShapeId, reveal: Real) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.reveal = reveal.clamp(0.0, 1.0);
                true
            },
            None => false,
        }
    }

    /// Set opacity (used by the fade-out cleanup phase). No-op on a stale handle.
    pub fn set_opacity(&mut self, id: ShapeId, opacity: Real) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.style.opacity = opacity.clamp(0.0, 1.0);
                true
            },
            None => false,
        }
    }

    pub fn clear_layer(&mut self, layer: Layer) {
        self.layer_mut(layer).clear();
    }

    /// Full reset: both layers. Handles survive as values but all become stale.
    pub fn clear(&mut self) {
        self.construction.clear();
        self.final_layer.clear();
    }

    pub fn construction_len(&self) -> usize {
        self.construction.len()
    }

    pub fn final_len(&self) -> usize {
        self.final_layer.len()
    }

    pub fn width(&self) -> Real {
        self.width
    }

    pub fn height(&self) -> Real {
        self.height
    }

    fn append_entry(group: el::Group, entry: &Entry) -> el::Group {
        let Style {
            stroke,
            stroke_width,
            fill,
            opacity,
            dashed,
        } = &entry.style;

        // Applies presentation attributes to any concrete element type, so
        // each shape stays a plain `svg` crate element (no boxing).
        macro_rules! styled {
            ($node:expr) => {{
                let mut node = $node
                    .set("stroke", stroke.clone().unwrap_or_else(|| "none".into()))
                    .set("stroke-width", *stroke_width)
                    .set("fill", fill.clone().unwrap_or_else(|| "none".into()));
                if *opacity < 1.0 {
                    node = node.set("opacity", *opacity);
                }
                if *dashed {
                    node = node.set("stroke-dasharray", "6 4");
                }
                if entry.reveal < 1.0 {
                    // Partial stroke reveal: normalize the path length to 1 and
                    // hide the tail with a dash offset.
                    node = node
                        .set("pathLength", 1)
                        .set("stroke-dasharray", 1)
                        .set("stroke-dashoffset", 1.0 - entry.reveal);
                }
                node
            }};
        }

        match &entry.shape {
            Shape::Circle { center, radius } => group.add(styled!(
                el::Circle::new()
                    .set("cx", center.x)
                    .set("cy", center.y)
                    .set("r", *radius)
            )),
            Shape::Line { from, to } => group.add(styled!(
                el::Line::new()
                    .set("x1", from.x)
                    .set("y1", from.y)
                    .set("x2", to.x)
                    .set("y2", to.y)
            )),
            Shape::Path { d } => group.add(styled!(el::Path::new().set("d", d.clone()))),
            Shape::Label { anchor, text } => group.add(styled!(
                el::Text::new(text.clone())
                    .set("x", anchor.x)
                    .set("y", anchor.y)
                    .set("text-anchor", "middle")
                    .set("font-size", 14)
            )),
        }
    }

    /// Serialize as an SVG document: background, then the construction group,
    /// then the final group.
    pub fn to_document(&self) -> Document {
        let background = el::Rectangle::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("fill", "#fdfbf5");

        let mut construction = el::Group::new().set("class", "construction");
        for entry in &self.construction {
            construction = Self::append_entry(construction, entry);
        }

        let mut final_group = el::Group::new().set("class", "final");
        for entry in &self.final_layer {
            final_group = Self::append_entry(final_group, entry);
        }

        Document::new()
            .set("width", self.width)
            .set("height", self.height)
            .set("viewBox", (0.0, 0.0, self.width, self.height))
            .add(background)
            .add(construction)
            .add(final_group)
    }

    /// Serialized SVG text, handy for snapshot comparisons.
    pub fn to_svg_string(&self) -> String {
        self.to_document().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_by_stale_handle_is_a_noop() {
        let mut surface = RenderSurface::new(100.0, 100.0);
        let id = surface.push(
            Layer::Construction,
            Shape::Line {
                from: Point2::new(0.0, 0.0),
                to: Point2::new(10.0, 10.0),
            },
            Style::default(),
        );
        assert!(surface.remove(id));
        assert!(!surface.remove(id));
        assert!(!surface.set_reveal(id, 0.5));
        assert!(!surface.set_opacity(id, 0.5));
    }

    #[test]
    fn layers_are_serialized_in_z_order() {
        let mut surface = RenderSurface::new(100.0, 100.0);
        surface.push(
            Layer::Final,
            Shape::Circle {
                center: Point2::new(50.0, 50.0),
                radius: 10.0,
            },
            Style::filled("#aaa"),
        );
        let text = surface.to_svg_string();
        let construction_at = text.find("class=\"construction\"").unwrap();
        let final_at = text.find("class=\"final\"").unwrap();
        assert!(construction_at < final_at);
    }
}
