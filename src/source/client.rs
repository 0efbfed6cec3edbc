//! HTTP registration of data sources.
//!
//! Only available with the `fetch` feature. No retries, no backoff: a
//! failed fetch is reported and the source is simply not registered.

use super::{
    classify, render_follow_up_url, NewDataSource, SourceDescriptor,
};
use crate::error::EvdispError;

/// Outcome of a successful source registration.
#[derive(Debug, Clone)]
pub enum Registration {
    /// Geometry data came embedded in the descriptor; ready to display.
    Ready {
        /// Embedded geometry data.
        geometry: serde_json::Value,
        /// Store event describing the new source.
        event: NewDataSource,
    },
    /// A collection source: the caller must fetch the synthesized URL to
    /// obtain the first entry.
    FollowUp {
        /// Follow-up URL with the default entry ID substituted in.
        url: String,
        /// Store event describing the new source.
        event: NewDataSource,
    },
}

impl Registration {
    /// The store event, whichever way registration went.
    #[must_use]
    pub fn event(&self) -> &NewDataSource {
        match self {
            Self::Ready { event, .. } | Self::FollowUp { event, .. } => event,
        }
    }
}

/// Fetch `endpoint`, classify its descriptor and prepare the registration.
///
/// Embedded-geometry models come back [`Registration::Ready`] with the
/// geometry payload and its serialized size; collection models come back
/// [`Registration::FollowUp`] with the URL for the second fetch.
pub fn register_source(
    name: &str,
    endpoint: &str,
) -> Result<Registration, EvdispError> {
    let body = ureq::get(endpoint)
        .call()
        .map_err(|e| EvdispError::Fetch(e.to_string()))?
        .into_body()
        .read_to_string()
        .map_err(|e| EvdispError::Fetch(e.to_string()))?;
    let descriptor: SourceDescriptor = serde_json::from_str(&body)?;
    let access_model = classify(&descriptor)?;
    log::info!(
        "data source \"{name}\" -> {endpoint} has access model {access_model}"
    );

    if access_model.embeds_geometry() {
        let geometry = descriptor.geometry_data.ok_or_else(|| {
            EvdispError::Payload(format!(
                "data source \"{name}\" embeds no geometryData"
            ))
        })?;
        let data_size = serde_json::to_string(&geometry)
            .map_err(|e| EvdispError::Payload(e.to_string()))?
            .len();
        Ok(Registration::Ready {
            geometry,
            event: NewDataSource {
                name: name.to_owned(),
                endpoint: endpoint.to_owned(),
                data_size: Some(data_size),
                access_model,
            },
        })
    } else {
        // classify() guarantees the pair is present for collection models.
        let links = descriptor.links.as_deref().ok_or_else(|| {
            EvdispError::Payload(format!(
                "data source \"{name}\" lacks _links"
            ))
        })?;
        let default_id = descriptor.default_id.as_ref().ok_or_else(|| {
            EvdispError::Payload(format!(
                "data source \"{name}\" lacks defaultID"
            ))
        })?;
        Ok(Registration::FollowUp {
            url: render_follow_up_url(links, default_id),
            event: NewDataSource {
                name: name.to_owned(),
                endpoint: endpoint.to_owned(),
                data_size: None,
                access_model,
            },
        })
    }
}
