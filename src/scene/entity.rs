//! Drawable entities: sensitive planes, track scores and tracks.
//!
//! A closed set of entity variants, each able to emit its drawables given a
//! [`DrawContext`]. Static entities (planes) are built once from geometry
//! data and looked up by label; per-event entities are rebuilt from each
//! event payload and discarded on the next.

use glam::Vec3;
use serde::Deserialize;

use super::drawable::{
    ColoredVertex, DrawableSet, LineSegmentsDescriptor, PointMarkerDescriptor,
    PolylineDescriptor,
};
use super::event::{defined, ScoreData, TrackPoint};
use super::StaticGeometry;
use crate::options::{ColorOptions, Options};

/// Context handed to entities while they emit drawables.
pub struct DrawContext<'a> {
    /// Static geometry registry (producer lookup by label).
    pub statics: &'a StaticGeometry,
    /// Active display options.
    pub options: &'a Options,
}

/// The one capability every entity variant implements: emit its drawable
/// descriptors into `out`, per kind, in insertion order.
pub trait Drawable {
    /// Append this entity's drawables to `out`.
    fn append_drawables(&self, ctx: &DrawContext<'_>, out: &mut DrawableSet);
}

// ---------------------------------------------------------------------------
// SensitivePlane
// ---------------------------------------------------------------------------

/// Construction arguments for a sensitive plane, as found in static
/// geometry data.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaneArgs {
    /// Unique plane label.
    pub label: String,
    /// Plane center.
    pub o: [f32; 3],
    /// Measurement direction (local X).
    pub u: [f32; 3],
    /// Reciprocal direction (local Y).
    pub v: [f32; 3],
    /// Plane extents along `u` and `v`.
    pub size: [f32; 2],
}

/// A finite-coordinate sensitive plane of the detector.
///
/// Keeps the cardinal vectors: `u` and `v` are the input directions
/// normalized and scaled to the plane's half-extent. `u ⟂ v` is assumed,
/// not verified.
#[derive(Debug, Clone)]
pub struct SensitivePlane {
    label: String,
    o: Vec3,
    u: Vec3,
    v: Vec3,
}

impl SensitivePlane {
    /// Build a plane from its geometry record.
    #[must_use]
    pub fn new(args: &PlaneArgs) -> Self {
        Self {
            label: args.label.clone(),
            o: Vec3::from(args.o),
            u: Vec3::from(args.u).normalize() * (args.size[0] / 2.0),
            v: Vec3::from(args.v).normalize() * (args.size[1] / 2.0),
        }
    }

    /// The plane's unique label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Bounding-rectangle outline: four edges as independent segments, with
    /// the near `u` and `v` edges colored per axis so the local orientation
    /// stays readable. Named by the plane label to keep it selectable.
    #[must_use]
    pub fn outline(&self, colors: &ColorOptions) -> LineSegmentsDescriptor {
        let (lb, rb) = (self.o - self.u - self.v, self.o + self.u - self.v);
        let (lt, rt) = (self.o - self.u + self.v, self.o + self.u + self.v);
        let [u0, u1] = colors.plane_u_edge;
        let [v0, v1] = colors.plane_v_edge;
        let far = colors.plane_outline;
        LineSegmentsDescriptor {
            name: self.label.clone(),
            vertices: vec![
                ColoredVertex::new(lb, u0),
                ColoredVertex::new(rb, u1),
                ColoredVertex::new(lb, v0),
                ColoredVertex::new(lt, v1),
                ColoredVertex::new(lt, far),
                ColoredVertex::new(rt, far),
                ColoredVertex::new(rb, far),
                ColoredVertex::new(rt, far),
            ],
        }
    }

    /// Project a score's local coordinates onto this plane.
    ///
    /// A 1-D measurement (`lR[1]` unavailable) becomes a short segment at
    /// `o + u·(2·lR[0] − 1)` spanning the full `v` extent: `lR[0] ∈ [0, 1]`
    /// runs across the measurement axis with 0.5 at the plane center. 2-D
    /// measurements (`lR[2]` unavailable) are not supported and are skipped
    /// with a warning.
    pub fn append_local_score_drawables(
        &self,
        score: &TrackScore,
        colors: &ColorOptions,
        out: &mut DrawableSet,
    ) {
        let local = score.data().local;
        if !defined(local[1]) {
            let base = self.o + self.u * (2.0 * local[0] - 1.0);
            out.colored_line_segments.push(LineSegmentsDescriptor {
                name: score.label(),
                vertices: vec![
                    ColoredVertex::new(base - self.v, colors.local_hit),
                    ColoredVertex::new(base + self.v, colors.local_hit),
                ],
            });
        } else if !defined(local[2]) {
            log::warn!(
                "2-D score {} on plane \"{}\" is not supported; skipped",
                score.label(),
                self.label
            );
        }
    }
}

impl Drawable for SensitivePlane {
    fn append_drawables(&self, ctx: &DrawContext<'_>, out: &mut DrawableSet) {
        out.colored_line_segments
            .push(self.outline(&ctx.options.colors));
    }
}

// ---------------------------------------------------------------------------
// TrackScore
// ---------------------------------------------------------------------------

/// Per-event track score: a measurement/reconstruction record with optional
/// global/local coordinates and optional Monte-Carlo truth.
///
/// Emits up to two point markers (reconstructed position, MC truth) and, if
/// the score carries a local reference whose producer plane is registered,
/// that plane's local-score projection.
#[derive(Debug, Clone)]
pub struct TrackScore {
    index: usize,
    data: ScoreData,
}

impl TrackScore {
    /// Wrap a decoded score record with its per-event index.
    #[must_use]
    pub fn new(index: usize, data: ScoreData) -> Self {
        Self { index, data }
    }

    /// The underlying score record.
    #[must_use]
    pub fn data(&self) -> &ScoreData {
        &self.data
    }

    /// Display name: `score[<producer>@<ordinal>]`, falling back to the
    /// per-event index when the score carries no reference.
    #[must_use]
    pub fn label(&self) -> String {
        match (&self.data.producer, self.data.ordinal) {
            (Some(producer), Some(ordinal)) => {
                format!("score[{producer}@{ordinal}]")
            }
            _ => format!("score[#{}]", self.index),
        }
    }
}

impl Drawable for TrackScore {
    fn append_drawables(&self, ctx: &DrawContext<'_>, out: &mut DrawableSet) {
        let colors = &ctx.options.colors;
        let markers = &ctx.options.markers;

        if defined(self.data.global[0]) {
            // Reconstructed coordinate: cross marker.
            out.point_markers.push(PointMarkerDescriptor {
                position: Vec3::from(self.data.global),
                size: markers.size,
                color: colors.score_marker,
                kind: markers.score_kind.clone(),
                name: None,
            });
        }

        if let Some(producer) = &self.data.producer {
            if defined(self.data.local[0]) {
                // Local coordinates: delegate to the producer plane, if its
                // static geometry has been loaded yet.
                match ctx.statics.plane(producer) {
                    Some(plane) => plane
                        .append_local_score_drawables(self, colors, out),
                    None => log::debug!(
                        "no producer \"{producer}\" registered; \
                         local score not drawn"
                    ),
                }
            }
        }

        if let Some(truth) = &self.data.mc_truth {
            if defined(truth.global_position[0]) {
                // MC truth intersection point: hollow marker, named like
                // the score so picking resolves to the same record.
                out.point_markers.push(PointMarkerDescriptor {
                    position: Vec3::from(truth.global_position),
                    size: markers.size,
                    color: colors.truth_marker,
                    kind: markers.truth_kind.clone(),
                    name: Some(self.label()),
                });
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Track
// ---------------------------------------------------------------------------

/// Per-event track: an unordered point list that becomes one polyline after
/// a stable ascending sort by the per-point sort parameter.
#[derive(Debug, Clone)]
pub struct Track {
    index: usize,
    points: Vec<TrackPoint>,
}

impl Track {
    /// Wrap a decoded track point list with its per-event index.
    #[must_use]
    pub fn new(index: usize, points: Vec<TrackPoint>) -> Self {
        Self { index, points }
    }

    /// Points sorted ascending by sort parameter. The sort is stable: ties
    /// keep their payload order.
    #[must_use]
    pub fn sorted_points(&self) -> Vec<TrackPoint> {
        let mut points = self.points.clone();
        points.sort_by(|a, b| {
            a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal)
        });
        points
    }
}

impl Drawable for Track {
    fn append_drawables(&self, ctx: &DrawContext<'_>, out: &mut DrawableSet) {
        let color = ctx.options.colors.track;
        out.colored_lines.push(PolylineDescriptor {
            name: format!("track[{}]", self.index),
            vertices: self
                .sorted_points()
                .into_iter()
                .map(|TrackPoint(position, _)| {
                    ColoredVertex::new(Vec3::from(position), color)
                })
                .collect(),
        });
    }
}
