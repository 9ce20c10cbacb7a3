//! Centralized viewer and decoder options with TOML preset support.
//!
//! All tweakable settings (camera lens and navigation, display toggles,
//! colors, sensor constants, ingest queue, keybindings) are consolidated
//! here. Options serialize to/from TOML presets.

mod camera;
mod colors;
mod decoder;
mod display;
mod ingest;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use decoder::DecoderOptions;
pub use display::DisplayOptions;
pub use ingest::IngestOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LidarError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and navigation parameters.
    pub camera: CameraOptions,
    /// Display toggles and sizes.
    pub display: DisplayOptions,
    /// Layer and overlay colors.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Sensor decoding constants.
    pub decoder: DecoderOptions,
    /// Background decode pipeline settings.
    pub ingest: IngestOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`LidarError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, LidarError> {
        toml::from_str(content)
            .map_err(|e| LidarError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`LidarError::Io`] if the file cannot be read,
    /// [`LidarError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, LidarError> {
        let content = std::fs::read_to_string(path).map_err(LidarError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`LidarError::OptionsParse`] if serialization fails,
    /// [`LidarError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), LidarError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LidarError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(LidarError::Io)?;
        }
        std::fs::write(path, content).map_err(LidarError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
