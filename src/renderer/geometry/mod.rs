//! Geometry primitive builders.
//!
//! Each builder takes the global transformation matrix (applied to every
//! position before buffer emission) plus kind-specific descriptors, and
//! returns one renderable per input item. Packed buffers are `f32` with
//! stride 3 (positions, colors) or 1 (sizes); byte views for upload come
//! from `bytemuck`. Empty input yields empty output, never an error.

/// Colored line-segment set builder.
pub mod line_segments;
/// Typed point-marker cloud builder.
pub mod point_markers;
/// Camera-relative dashed polyline builder.
pub mod polyline;

use glam::{Mat3, Vec3};
pub use line_segments::{build_line_segments, LineSegmentsPrimitive};
pub use point_markers::{build_point_markers, PointMarkersPrimitive};
pub use polyline::{build_dashed_lines, DashMaterial, DashedLinePrimitive};

use crate::scene::ColoredVertex;

/// Axis-aligned bounding box over transformed positions.
///
/// Presumed by the camera-fitting code to encompass the main part of the
/// scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Componentwise minimum.
    pub min: Vec3,
    /// Componentwise maximum.
    pub max: Vec3,
}

impl Aabb {
    /// Bounding box of `points`; `None` for an empty iterator.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self>
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in points {
            bounds.min = bounds.min.min(p);
            bounds.max = bounds.max.max(p);
        }
        Some(bounds)
    }
}

/// Transform the descriptor vertices and pack them into parallel position
/// and color buffers (`position[i]` corresponds to `color[i]`).
pub(crate) fn pack_vertices(
    vertices: &[ColoredVertex],
    tm: Mat3,
) -> (Vec<f32>, Vec<f32>, Option<Aabb>) {
    let transformed: Vec<Vec3> =
        vertices.iter().map(|vx| tm * vx.position).collect();
    let bounds = Aabb::from_points(transformed.iter().copied());
    let mut positions = Vec::with_capacity(vertices.len() * 3);
    for p in &transformed {
        positions.extend_from_slice(&p.to_array());
    }
    let mut colors = Vec::with_capacity(vertices.len() * 3);
    for vx in vertices {
        colors.extend_from_slice(&vx.color);
    }
    (positions, colors, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_over_points() {
        let bounds = Aabb::from_points(vec![
            Vec3::new(1.0, -2.0, 0.0),
            Vec3::new(-1.0, 3.0, 5.0),
        ]);
        assert_eq!(
            bounds,
            Some(Aabb {
                min: Vec3::new(-1.0, -2.0, 0.0),
                max: Vec3::new(1.0, 3.0, 5.0),
            })
        );
    }

    #[test]
    fn test_aabb_of_nothing() {
        assert_eq!(Aabb::from_points(Vec::new()), None);
    }

    #[test]
    fn test_pack_applies_transform_and_keeps_order() {
        let vertices = vec![
            ColoredVertex::new(Vec3::new(1.0, 0.0, 0.0), [0.1, 0.2, 0.3]),
            ColoredVertex::new(Vec3::new(0.0, 1.0, 0.0), [0.4, 0.5, 0.6]),
        ];
        let (positions, colors, bounds) =
            pack_vertices(&vertices, Mat3::from_diagonal(Vec3::splat(2.0)));
        assert_eq!(positions, vec![2.0, 0.0, 0.0, 0.0, 2.0, 0.0]);
        assert_eq!(colors, vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]);
        assert_eq!(
            bounds,
            Some(Aabb {
                min: Vec3::ZERO,
                max: Vec3::new(2.0, 2.0, 0.0),
            })
        );
    }
}
