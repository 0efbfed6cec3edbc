use serde::{Deserialize, Serialize};

/// Marker kinds and sizes used by the score drawables.
///
/// Kind strings are marker keys in wire form (`shape[-flags[-size]]`, see
/// [`crate::markers`]); resolution against the asset cache happens in the
/// point-marker builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MarkerOptions {
    /// Marker key for reconstructed score positions.
    pub score_kind: String,
    /// Marker key for Monte-Carlo truth positions.
    pub truth_kind: String,
    /// On-screen marker size in pixels.
    pub size: f32,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            score_kind: "xCross".to_owned(),
            truth_kind: "hollowXCross-0-16".to_owned(),
            size: 16.0,
        }
    }
}
