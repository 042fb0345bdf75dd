//! Box presets and export preferences
//!
//! A preset file holds the box style, the box parameters and the export
//! settings. JSON and TOML are supported, chosen by file extension:
//!
//! ```toml
//! style = "stackable"
//!
//! [box]
//! length = 120.0
//! width = 90.0
//! height = 70.0
//! thickness = 3.0
//! finger_counts = [3, 3, 3]
//!
//! [export]
//! format = "svg"
//! margin = 30.0
//! ```

use jointkit_camtools::BoxParameters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Box design selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxStyle {
    /// Finger joints on every edge
    #[default]
    Simple,
    /// Open box with plain top edges
    StraightTop,
    /// Stackable box with feet and a recessed bottom
    Stackable,
}

impl std::fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "Simple"),
            Self::StraightTop => write!(f, "Straight top"),
            Self::Stackable => write!(f, "Stackable"),
        }
    }
}

/// Output document type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Svg,
    Json,
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub format: ExportFormat,
    /// Space added to the bottom-right of the sheet in mm
    pub margin: f64,
    /// Gap between laid out panels in mm
    pub spacing: f64,
    /// Default directory for relative output names
    pub output_directory: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::Svg,
            margin: 30.0,
            spacing: 10.0,
            output_directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// Complete preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub style: BoxStyle,
    #[serde(rename = "box")]
    pub box_settings: BoxParameters,
    pub export: ExportSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/jointkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("jointkit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".into())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };
        config.validate()?;
        debug!("loaded {} box preset from {}", config.style, path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.box_settings.validate()?;

        if self.export.margin < 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "export.margin".to_string(),
                reason: format!("must not be negative, got {}", self.export.margin),
            });
        }

        if self.export.spacing < 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "export.spacing".to_string(),
                value: self.export.spacing.to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Resolve an output file name against the export directory
    pub fn output_path(&self, name: &Path) -> PathBuf {
        if name.is_absolute() {
            name.to_path_buf()
        } else {
            self.export.output_directory.join(name)
        }
    }
}
