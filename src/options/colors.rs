use serde::{Deserialize, Serialize};

/// Color palette for generated drawables.
///
/// Plane edge colors come in start/end pairs so the local axis direction
/// stays readable as a gradient along the edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Gradient endpoints for plane edges along the measurement axis `u`.
    pub plane_u_edge: [[f32; 3]; 2],
    /// Gradient endpoints for plane edges along the reciprocal axis `v`.
    pub plane_v_edge: [[f32; 3]; 2],
    /// Color for the remaining (far) plane outline edges.
    pub plane_outline: [f32; 3],
    /// Color for 1-D local-score hit segments.
    pub local_hit: [f32; 3],
    /// Color for reconstructed-position score markers.
    pub score_marker: [f32; 3],
    /// Color for Monte-Carlo truth markers.
    pub truth_marker: [f32; 3],
    /// Color for track polylines.
    pub track: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            plane_u_edge: [[0.8, 0.3, 0.3], [0.9, 0.6, 0.6]],
            plane_v_edge: [[0.1, 0.5, 0.1], [0.6, 0.9, 0.6]],
            plane_outline: [0.9, 0.9, 0.9],
            local_hit: [0.8, 0.8, 0.2],
            score_marker: [0.94, 0.92, 0.38],
            truth_marker: [0.94, 0.92, 0.38],
            track: [0.6, 0.9, 0.5],
        }
    }
}
