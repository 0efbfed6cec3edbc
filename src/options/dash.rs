use serde::{Deserialize, Serialize};

/// Uniform parameters for the screen-space dashed-line shader.
///
/// The dash pattern is computed in screen space relative to the camera, so
/// the viewport resolution participates; the owning viewport is expected to
/// refresh `resolution` on resize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashOptions {
    /// Viewport resolution in pixels.
    pub resolution: [f32; 2],
    /// Dash length in pixels.
    pub dash_size: f32,
    /// Gap length in pixels.
    pub gap_size: f32,
    /// Flat line color (used when per-vertex color is disabled).
    pub color: [f32; 3],
    /// Whether the dashed material blends per-vertex colors.
    pub vertex_colors: bool,
}

impl Default for DashOptions {
    fn default() -> Self {
        Self {
            resolution: [828.0, 955.0],
            dash_size: 3.0,
            gap_size: 5.0,
            color: [0.8, 0.7, 0.7],
            vertex_colors: true,
        }
    }
}
