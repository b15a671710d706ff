//! Configuration for Tape Sprocket Designer
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats; the default file lives in the
//! platform-specific configuration directory.
//!
//! Configuration is organized into two sections:
//! - Sprocket parameters used when no explicit values are given
//! - Export defaults (DXF scale, SVG path encoding and stroke width)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tapesprocket_core::{Error, Result, SprocketParameters};
use tapesprocket_designer::ExportSettings;
use tracing::debug;

/// Directory name below the platform configuration directory
pub const APP_DIR_NAME: &str = "tapesprocket";
/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Sprocket parameters
    pub parameters: SprocketParameters,
    /// Export defaults
    pub export: ExportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid JSON config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| Error::config(format!("Invalid TOML config: {}", e)))?
        } else {
            return Err(Error::config("Config file must be .json or .toml"));
        };

        config.validate()?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load an explicit file, or the default file if it exists, or the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(default) if default.exists() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| Error::config(format!("Failed to serialize config: {}", e)))?
        } else {
            return Err(Error::config("Config file must be .json or .toml"));
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()?;
        self.export.validate()?;
        Ok(())
    }
}
