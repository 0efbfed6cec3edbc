//! Crate-level error types.

use std::fmt;

use crate::markers::MarkerError;
use crate::source::ClassifyError;

/// Errors produced by the evdisp crate.
#[derive(Debug)]
pub enum EvdispError {
    /// Data-source descriptor did not match any known access model.
    Classify(ClassifyError),
    /// Marker key parsing or shape lookup failure.
    Marker(MarkerError),
    /// Static-scene descriptor failed validation.
    SceneLoad(String),
    /// Inbound JSON payload failed to decode.
    Payload(String),
    /// HTTP fetch failed or returned a non-success status.
    Fetch(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for EvdispError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classify(e) => write!(f, "classification error: {e}"),
            Self::Marker(e) => write!(f, "marker error: {e}"),
            Self::SceneLoad(msg) => write!(f, "scene load error: {msg}"),
            Self::Payload(msg) => write!(f, "payload error: {msg}"),
            Self::Fetch(msg) => write!(f, "fetch error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for EvdispError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Classify(e) => Some(e),
            Self::Marker(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ClassifyError> for EvdispError {
    fn from(e: ClassifyError) -> Self {
        Self::Classify(e)
    }
}

impl From<MarkerError> for EvdispError {
    fn from(e: MarkerError) -> Self {
        Self::Marker(e)
    }
}

impl From<std::io::Error> for EvdispError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for EvdispError {
    fn from(e: serde_json::Error) -> Self {
        Self::Payload(e.to_string())
    }
}
