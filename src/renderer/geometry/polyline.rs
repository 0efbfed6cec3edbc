//! Camera-relative dashed polyline builder.
//!
//! The dash pattern is computed in screen space by the dashed-line shader,
//! so it stays uniform relative to the camera rather than the world. The
//! shader additionally needs per-vertex cumulative line distances, which
//! are precomputed here over the transformed polyline.

use glam::{Mat3, Vec3};

use super::{pack_vertices, Aabb};
use crate::options::DashOptions;
use crate::scene::PolylineDescriptor;

/// Vertex shader for camera-relative dashed lines (opaque asset).
pub const DASHED_LINE_VERTEX_SHADER: &str =
    include_str!("../../../assets/shaders/dashed_line.vert");
/// Fragment shader for camera-relative dashed lines (opaque asset).
pub const DASHED_LINE_FRAGMENT_SHADER: &str =
    include_str!("../../../assets/shaders/dashed_line.frag");

/// Shader-backed material for camera-relative dashed lines.
#[derive(Debug, Clone, PartialEq)]
pub struct DashMaterial {
    /// Viewport resolution uniform, in pixels.
    pub resolution: [f32; 2],
    /// Dash length uniform, in pixels.
    pub dash_size: f32,
    /// Gap length uniform, in pixels.
    pub gap_size: f32,
    /// Flat line color uniform.
    pub color: [f32; 3],
    /// Whether per-vertex colors blend along the line.
    pub vertex_colors: bool,
    /// Vertex shader source (opaque asset).
    pub vertex_shader: &'static str,
    /// Fragment shader source (opaque asset).
    pub fragment_shader: &'static str,
}

impl DashMaterial {
    /// Material with uniforms taken from the dash options.
    #[must_use]
    pub fn from_options(dash: &DashOptions) -> Self {
        Self {
            resolution: dash.resolution,
            dash_size: dash.dash_size,
            gap_size: dash.gap_size,
            color: dash.color,
            vertex_colors: dash.vertex_colors,
            vertex_shader: DASHED_LINE_VERTEX_SHADER,
            fragment_shader: DASHED_LINE_FRAGMENT_SHADER,
        }
    }
}

/// Upload-ready buffers for one connected dashed polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct DashedLinePrimitive {
    /// Name carried over from the descriptor.
    pub name: String,
    /// Packed positions, stride 3.
    pub positions: Vec<f32>,
    /// Packed colors, stride 3, parallel to `positions`.
    pub colors: Vec<f32>,
    /// Cumulative distance along the transformed polyline, one per vertex.
    pub line_distances: Vec<f32>,
    /// Bounding box over the transformed positions.
    pub bounds: Option<Aabb>,
    /// Dashed-line material for this polyline.
    pub material: DashMaterial,
}

impl DashedLinePrimitive {
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

    /// Line-distance buffer as bytes for upload.
    #[must_use]
    pub fn line_distance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.line_distances)
    }
}

/// Cumulative vertex distances along a packed position buffer.
fn line_distances(positions: &[f32]) -> Vec<f32> {
    let mut distances = Vec::with_capacity(positions.len() / 3);
    let mut total = 0.0;
    let mut previous: Option<Vec3> = None;
    for point in positions.chunks_exact(3) {
        let p = Vec3::new(point[0], point[1], point[2]);
        if let Some(q) = previous {
            total += p.distance(q);
        }
        distances.push(total);
        previous = Some(p);
    }
    distances
}

/// Build one dashed renderable per descriptor, applying `tm` to every
/// position.
#[must_use]
pub fn build_dashed_lines(
    descriptors: &[PolylineDescriptor],
    tm: Mat3,
    dash: &DashOptions,
) -> Vec<DashedLinePrimitive> {
    descriptors
        .iter()
        .map(|descriptor| {
            let (positions, colors, bounds) =
                pack_vertices(&descriptor.vertices, tm);
            let line_distances = line_distances(&positions);
            DashedLinePrimitive {
                name: descriptor.name.clone(),
                positions,
                colors,
                line_distances,
                bounds,
                material: DashMaterial::from_options(dash),
            }
        })
        .collect()
}
