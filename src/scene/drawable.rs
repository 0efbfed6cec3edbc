//! Drawable collections and the primitive descriptors entities emit.

use glam::Vec3;

/// A position with an RGB color attached, in `[0, 1]` channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredVertex {
    /// World-space position (before the global transformation).
    pub position: Vec3,
    /// RGB color.
    pub color: [f32; 3],
}

impl ColoredVertex {
    /// Pair a position with a color.
    #[must_use]
    pub fn new(position: Vec3, color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Independent colored segments; vertices are consumed two at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegmentsDescriptor {
    /// Name carried through to the renderable (keeps it selectable).
    pub name: String,
    /// Segment endpoints, two per segment.
    pub vertices: Vec<ColoredVertex>,
}

/// One connected colored polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineDescriptor {
    /// Name carried through to the renderable.
    pub name: String,
    /// Polyline vertices in order.
    pub vertices: Vec<ColoredVertex>,
}

/// A single typed point marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMarkerDescriptor {
    /// World-space position (before the global transformation).
    pub position: Vec3,
    /// On-screen size in pixels.
    pub size: f32,
    /// RGB color.
    pub color: [f32; 3],
    /// Marker key in wire form; must resolve against the asset cache.
    pub kind: String,
    /// Optional name for picking individual markers out of a set.
    pub name: Option<String>,
}

/// Per-kind collection of drawable descriptors.
///
/// Every kind is always present (possibly empty) so merging code never has
/// to special-case absence. Collections merge by per-kind concatenation in
/// insertion order, which keeps repeated runs over the same input
/// byte-identical.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawableSet {
    /// Independent colored segments.
    pub colored_line_segments: Vec<LineSegmentsDescriptor>,
    /// Typed point markers.
    pub point_markers: Vec<PointMarkerDescriptor>,
    /// Connected colored polylines.
    pub colored_lines: Vec<PolylineDescriptor>,
}

impl DrawableSet {
    /// An empty collection with every kind present.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `other`'s descriptors after this collection's, per kind.
    pub fn merge(&mut self, other: Self) {
        self.colored_line_segments
            .extend(other.colored_line_segments);
        self.point_markers.extend(other.point_markers);
        self.colored_lines.extend(other.colored_lines);
    }

    /// Whether no kind holds any descriptor.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colored_line_segments.is_empty()
            && self.point_markers.is_empty()
            && self.colored_lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(name: &str) -> DrawableSet {
        DrawableSet {
            colored_line_segments: vec![LineSegmentsDescriptor {
                name: name.to_owned(),
                vertices: vec![],
            }],
            ..DrawableSet::new()
        }
    }

    fn marker(kind: &str) -> DrawableSet {
        DrawableSet {
            point_markers: vec![PointMarkerDescriptor {
                position: Vec3::ZERO,
                size: 16.0,
                color: [1.0, 1.0, 1.0],
                kind: kind.to_owned(),
                name: None,
            }],
            ..DrawableSet::new()
        }
    }

    #[test]
    fn test_merge_is_associative_and_order_preserving() {
        let (a, b, c) = (segments("a"), marker("b"), segments("c"));

        // (parent <- a) <- b  vs  parent <- (a <- b), then <- c each way.
        let mut stepwise = DrawableSet::new();
        stepwise.merge(a.clone());
        stepwise.merge(b.clone());
        stepwise.merge(c.clone());

        let mut pre_merged = a;
        pre_merged.merge(b);
        let mut combined = DrawableSet::new();
        combined.merge(pre_merged);
        combined.merge(c);

        assert_eq!(stepwise, combined);
        let names: Vec<&str> = stepwise
            .colored_line_segments
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_every_kind_present_when_empty() {
        let set = DrawableSet::new();
        assert!(set.is_empty());
        assert_eq!(set.colored_line_segments.len(), 0);
        assert_eq!(set.point_markers.len(), 0);
        assert_eq!(set.colored_lines.len(), 0);
    }
}
