//! Colored line-segment set builder.

use glam::Mat3;

use super::{pack_vertices, Aabb};
use crate::scene::LineSegmentsDescriptor;

/// Upload-ready buffers for one set of independent colored segments.
///
/// Vertices pair up into segments; per-vertex colors blend along each
/// segment in the line material.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegmentsPrimitive {
    /// Name carried over from the descriptor (picking/selection handle).
    pub name: String,
    /// Packed positions, stride 3.
    pub positions: Vec<f32>,
    /// Packed colors, stride 3, parallel to `positions`.
    pub colors: Vec<f32>,
    /// Bounding box over the transformed positions.
    pub bounds: Option<Aabb>,
}

impl LineSegmentsPrimitive {
    /// Number of vertices in the buffers.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Position buffer as bytes for upload.
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Color buffer as bytes for upload.
    #[must_use]
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }
}

/// Build one renderable per descriptor, applying `tm` to every position.
#[must_use]
pub fn build_line_segments(
    descriptors: &[LineSegmentsDescriptor],
    tm: Mat3,
) -> Vec<LineSegmentsPrimitive> {
    descriptors
        .iter()
        .map(|descriptor| {
            let (positions, colors, bounds) =
                pack_vertices(&descriptor.vertices, tm);
            LineSegmentsPrimitive {
                name: descriptor.name.clone(),
                positions,
                colors,
                bounds,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::ColoredVertex;

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(build_line_segments(&[], Mat3::IDENTITY).is_empty());
    }

    #[test]
    fn test_buffers_are_parallel_and_transformed() {
        let descriptors = vec![LineSegmentsDescriptor {
            name: "GM01".to_owned(),
            vertices: vec![
                ColoredVertex::new(Vec3::new(-1.0, 0.0, 0.0), [0.8, 0.3, 0.3]),
                ColoredVertex::new(Vec3::new(1.0, 0.0, 0.0), [0.9, 0.6, 0.6]),
            ],
        }];
        let built = build_line_segments(
            &descriptors,
            Mat3::from_diagonal(Vec3::new(2.0, 1.0, 1.0)),
        );
        assert_eq!(built.len(), 1);
        let primitive = &built[0];
        assert_eq!(primitive.name, "GM01");
        assert_eq!(primitive.vertex_count(), 2);
        assert_eq!(primitive.positions[0], -2.0);
        assert_eq!(primitive.positions[3], 2.0);
        assert_eq!(primitive.colors.len(), primitive.positions.len());
        assert_eq!(
            primitive.bounds,
            Some(Aabb {
                min: Vec3::new(-2.0, 0.0, 0.0),
                max: Vec3::new(2.0, 0.0, 0.0),
            })
        );
        assert_eq!(primitive.position_bytes().len(), 6 * 4);
    }

    #[test]
    fn test_empty_descriptor_yields_empty_buffers() {
        let descriptors = vec![LineSegmentsDescriptor {
            name: "empty".to_owned(),
            vertices: vec![],
        }];
        let built = build_line_segments(&descriptors, Mat3::IDENTITY);
        assert_eq!(built.len(), 1);
        assert_eq!(built[0].vertex_count(), 0);
        assert_eq!(built[0].bounds, None);
    }
}
