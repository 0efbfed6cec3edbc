//! Per-event payload decoding.
//!
//! Event payloads arrive as JSON with a `$collections` member carrying the
//! per-event `trackScores` and `tracks` arrays. Coordinate triples may hold
//! `null` components ("not available"); those decode to NaN so definedness
//! checks stay uniform across absent, null and NaN inputs.

use serde::{Deserialize, Deserializer};

use super::entity::{Track, TrackScore};
use crate::error::EvdispError;

/// A coordinate triple with every component unavailable.
fn nan3() -> [f32; 3] {
    [f32::NAN; 3]
}

/// Decode a coordinate array whose components may be `null`; missing or
/// null components become NaN.
fn nullable3<'de, D>(deserializer: D) -> Result<[f32; 3], D::Error>
where
    D: Deserializer<'de>,
{
    let components: Vec<Option<f64>> = Vec::deserialize(deserializer)?;
    let mut out = nan3();
    for (slot, component) in out.iter_mut().zip(components) {
        if let Some(value) = component {
            *slot = value as f32;
        }
    }
    Ok(out)
}

/// Whether a decoded coordinate component is available.
#[must_use]
pub fn defined(component: f32) -> bool {
    component.is_finite()
}

/// Monte-Carlo truth block of a score record.
#[derive(Debug, Clone, Deserialize)]
pub struct McTruth {
    /// True global intersection point, NaN-padded where unavailable.
    #[serde(
        rename = "globalPosition",
        default = "nan3",
        deserialize_with = "nullable3"
    )]
    pub global_position: [f32; 3],
}

/// One track-score record as provided by the acquisition middleware.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreData {
    /// Measured/reconstructed global position, NaN-padded.
    #[serde(rename = "gR", default = "nan3", deserialize_with = "nullable3")]
    pub global: [f32; 3],
    /// Local in-plane coordinates, NaN-padded; tied to [`Self::producer`].
    #[serde(rename = "lR", default = "nan3", deserialize_with = "nullable3")]
    pub local: [f32; 3],
    /// Label of the sensitive plane that produced the local coordinates.
    #[serde(rename = "$k", default)]
    pub producer: Option<String>,
    /// Index of this score within the producer's collection.
    #[serde(rename = "$n", default)]
    pub ordinal: Option<u64>,
    /// Monte-Carlo truth information, when simulated.
    #[serde(rename = "mcTruth", default)]
    pub mc_truth: Option<McTruth>,
}

/// One track point: position plus the sorting parameter.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TrackPoint(pub [f32; 3], pub f32);

/// The `$collections` member of an event payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventCollections {
    /// Track-score records.
    #[serde(rename = "trackScores", default)]
    pub track_scores: Vec<ScoreData>,
    /// Tracks, each an unordered list of `[position, sortKey]` pairs.
    #[serde(default)]
    pub tracks: Vec<Vec<TrackPoint>>,
}

/// A decoded per-event payload.
#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    /// Per-event object collections.
    #[serde(rename = "$collections", default)]
    pub collections: EventCollections,
}

impl EventPayload {
    /// Decode an event payload from JSON.
    pub fn from_value(value: serde_json::Value) -> Result<Self, EvdispError> {
        serde_json::from_value(value).map_err(EvdispError::from)
    }

    /// Build per-event entities, indexed in payload order.
    #[must_use]
    pub fn into_entities(self) -> (Vec<TrackScore>, Vec<Track>) {
        let scores = self
            .collections
            .track_scores
            .into_iter()
            .enumerate()
            .map(|(index, data)| TrackScore::new(index, data))
            .collect();
        let tracks = self
            .collections
            .tracks
            .into_iter()
            .enumerate()
            .map(|(index, points)| Track::new(index, points))
            .collect();
        (scores, tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_components_decode_to_nan() {
        let Ok(score) = serde_json::from_value::<ScoreData>(serde_json::json!(
            { "gR": [1.0, null, 3.0] }
        )) else {
            unreachable!("score with nullable gR decodes");
        };
        assert!(defined(score.global[0]));
        assert!(!defined(score.global[1]));
        assert!(defined(score.global[2]));
        // lR absent entirely: every component unavailable.
        assert!(score.local.iter().all(|&c| !defined(c)));
    }

    #[test]
    fn test_short_coordinate_arrays_pad_with_nan() {
        let Ok(score) = serde_json::from_value::<ScoreData>(serde_json::json!(
            { "lR": [0.25], "$k": "GM01", "$n": 3 }
        )) else {
            unreachable!("score with short lR decodes");
        };
        assert_eq!(score.local[0], 0.25);
        assert!(!defined(score.local[1]));
        assert_eq!(score.producer.as_deref(), Some("GM01"));
        assert_eq!(score.ordinal, Some(3));
    }

    #[test]
    fn test_event_payload_collections() {
        let Ok(payload) = EventPayload::from_value(serde_json::json!({
            "$collections": {
                "trackScores": [ { "gR": [0.0, 0.0, 0.0] } ],
                "tracks": [ [ [[0.0, 0.0, -1.0], 0.0], [[0.1, 0.0, 1.0], 1.0] ] ]
            }
        })) else {
            unreachable!("well-formed event payload decodes");
        };
        let (scores, tracks) = payload.into_entities();
        assert_eq!(scores.len(), 1);
        assert_eq!(tracks.len(), 1);
    }
}
