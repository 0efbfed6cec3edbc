//! Data-source layer: descriptor classification and registration.
//!
//! The classifier runs once per registered source, immediately after the
//! descriptor fetch, and decides whether geometry data is already embedded
//! in the response or must be fetched through a synthesized follow-up URL.
//! Sources are independent: a classification or fetch failure is fatal to
//! that source's registration only.

#[cfg(feature = "fetch")]
mod client;
mod descriptor;

#[cfg(feature = "fetch")]
pub use client::{register_source, Registration};
pub use descriptor::{
    classify, render_follow_up_url, AccessModel, ClassifyError,
    SourceDescriptor,
};
use serde::Serialize;

/// Event handed to the UI store collaborator once a source registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDataSource {
    /// Source name chosen by the user.
    pub name: String,
    /// Endpoint URL the descriptor was fetched from.
    pub endpoint: String,
    /// Serialized size of the fetched geometry data, when embedded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_size: Option<usize>,
    /// Classified access model.
    pub access_model: AccessModel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_source_event_wire_form() {
        let event = NewDataSource {
            name: "evdsp-test".to_owned(),
            endpoint: "http://localhost:5657/api/geometry".to_owned(),
            data_size: Some(1024),
            access_model: AccessModel::StaticView,
        };
        let Ok(value) = serde_json::to_value(&event) else {
            unreachable!("event serializes");
        };
        assert_eq!(
            value,
            serde_json::json!({
                "name": "evdsp-test",
                "endpoint": "http://localhost:5657/api/geometry",
                "dataSize": 1024,
                "accessModel": "staticView"
            })
        );
    }
}
