//! Centralized display options with TOML preset support.
//!
//! All tweakable settings (drawable colors, marker defaults, dash shader
//! uniforms) are consolidated here. Options serialize to/from TOML so a
//! deployment can ship per-experiment presets. All sub-structs use
//! `#[serde(default)]` so partial files (e.g. only overriding `[dash]`)
//! work correctly.

mod colors;
mod dash;
mod markers;

use std::path::Path;

pub use colors::ColorOptions;
pub use dash::DashOptions;
pub use markers::MarkerOptions;
use serde::{Deserialize, Serialize};

use crate::error::EvdispError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Drawable color palette.
    pub colors: ColorOptions,
    /// Marker kind/size defaults for score drawables.
    pub markers: MarkerOptions,
    /// Screen-space dashed-line shader parameters.
    pub dash: DashOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, EvdispError> {
        let content = std::fs::read_to_string(path).map_err(EvdispError::Io)?;
        toml::from_str(&content)
            .map_err(|e| EvdispError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), EvdispError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EvdispError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(EvdispError::Io)?;
        }
        std::fs::write(path, content).map_err(EvdispError::Io)
    }
}
