//! Drawable entity model: static detector geometry and per-event data.
//!
//! Static geometry (sensitive planes) loads once per data source and is
//! looked up by label; per-event entities (track scores, tracks) are
//! rebuilt from each event payload. Every entity emits its drawables into a
//! [`DrawableSet`] through the [`Drawable`] trait; composition is per-kind
//! concatenation in insertion order.

pub mod assembly;
mod drawable;
mod entity;
pub mod event;

pub use drawable::{
    ColoredVertex, DrawableSet, LineSegmentsDescriptor, PointMarkerDescriptor,
    PolylineDescriptor,
};
pub use entity::{
    DrawContext, Drawable, PlaneArgs, SensitivePlane, Track, TrackScore,
};
use rustc_hash::FxHashMap;

use crate::error::EvdispError;

/// Registry of static detector entities, in insertion order, with label
/// lookup for local-score producers.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    planes: Vec<SensitivePlane>,
    by_label: FxHashMap<String, usize>,
}

impl StaticGeometry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a data source's embedded geometry data: an
    /// array of sensitive-plane records.
    pub fn from_value(value: serde_json::Value) -> Result<Self, EvdispError> {
        let args: Vec<PlaneArgs> = serde_json::from_value(value)?;
        let mut statics = Self::new();
        for plane_args in &args {
            statics.insert(SensitivePlane::new(plane_args));
        }
        Ok(statics)
    }

    /// Register a plane. A plane with the same label replaces the previous
    /// registration in place.
    pub fn insert(&mut self, plane: SensitivePlane) {
        if let Some(&at) = self.by_label.get(plane.label()) {
            log::warn!(
                "sensitive plane \"{}\" registered twice; replacing",
                plane.label()
            );
            self.planes[at] = plane;
        } else {
            let _ = self
                .by_label
                .insert(plane.label().to_owned(), self.planes.len());
            self.planes.push(plane);
        }
    }

    /// Look a producer up by label.
    #[must_use]
    pub fn plane(&self, label: &str) -> Option<&SensitivePlane> {
        self.by_label.get(label).map(|&at| &self.planes[at])
    }

    /// All planes, in insertion order.
    #[must_use]
    pub fn planes(&self) -> &[SensitivePlane] {
        &self.planes
    }

    /// Number of registered planes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Whether no plane is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }
}

impl Drawable for StaticGeometry {
    /// Outlines for every registered plane, in insertion order.
    fn append_drawables(&self, ctx: &DrawContext<'_>, out: &mut DrawableSet) {
        for plane in &self.planes {
            plane.append_drawables(ctx, out);
        }
    }
}

/// Collect the drawables of `entities` into one set, in entity order.
#[must_use]
pub fn collect_drawables(
    ctx: &DrawContext<'_>,
    entities: &[&dyn Drawable],
) -> DrawableSet {
    let mut out = DrawableSet::new();
    for entity in entities {
        entity.append_drawables(ctx, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn plane(label: &str, x: f32) -> SensitivePlane {
        SensitivePlane::new(&PlaneArgs {
            label: label.to_owned(),
            o: [x, 0.0, 0.0],
            u: [1.0, 0.0, 0.0],
            v: [0.0, 1.0, 0.0],
            size: [2.0, 2.0],
        })
    }

    #[test]
    fn test_registry_preserves_insertion_order() {
        let mut statics = StaticGeometry::new();
        statics.insert(plane("b", 1.0));
        statics.insert(plane("a", 2.0));
        let labels: Vec<&str> =
            statics.planes().iter().map(SensitivePlane::label).collect();
        assert_eq!(labels, vec!["b", "a"]);
        assert!(statics.plane("a").is_some());
        assert!(statics.plane("c").is_none());
    }

    #[test]
    fn test_duplicate_label_replaces_in_place() {
        let mut statics = StaticGeometry::new();
        statics.insert(plane("a", 1.0));
        statics.insert(plane("b", 2.0));
        statics.insert(plane("a", 3.0));
        assert_eq!(statics.len(), 2);
        let labels: Vec<&str> =
            statics.planes().iter().map(SensitivePlane::label).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[test]
    fn test_from_value_builds_lookup() {
        let Ok(statics) = StaticGeometry::from_value(serde_json::json!([
            { "label": "GM01", "o": [0.0, 0.0, -1.0],
              "u": [1.0, 0.0, 0.0], "v": [0.0, 1.0, 0.0],
              "size": [2.0, 2.0] }
        ])) else {
            unreachable!("well-formed geometry data loads");
        };
        assert_eq!(statics.len(), 1);
        assert!(statics.plane("GM01").is_some());
    }

    #[test]
    fn test_collect_drawables_concatenates_in_entity_order() {
        let mut statics = StaticGeometry::new();
        statics.insert(plane("first", 0.0));
        statics.insert(plane("second", 1.0));
        let options = Options::default();
        let ctx = DrawContext {
            statics: &statics,
            options: &options,
        };
        let out = collect_drawables(&ctx, &[&statics]);
        let names: Vec<&str> = out
            .colored_line_segments
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
