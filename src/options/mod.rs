//! Renderer options with TOML preset support.
//!
//! Camera placement and UI overlay settings are consolidated here. Options
//! serialize to/from TOML; every section uses `#[serde(default)]` so partial
//! files work.

mod camera;
mod ui;

use std::path::Path;

pub use camera::CameraOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use ui::{AddressMode, Filter, SamplerOptions, UiOptions};

use crate::error::MulchError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Initial camera placement and projection parameters.
    pub camera: CameraOptions,
    /// UI overlay parameters.
    pub ui: UiOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MulchError::Io`] if the file cannot be read and
    /// [`MulchError::OptionsParse`] if it is not valid TOML for [`Options`].
    pub fn load(path: &Path) -> Result<Self, MulchError> {
        let content = std::fs::read_to_string(path).map_err(MulchError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MulchError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, MulchError> {
        toml::from_str(content)
            .map_err(|e| MulchError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`MulchError::OptionsParse`] if serialization fails and
    /// [`MulchError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), MulchError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MulchError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MulchError::Io)?;
        }
        std::fs::write(path, content).map_err(MulchError::Io)
    }
}
