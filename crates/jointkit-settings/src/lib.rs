//! JointKit Settings Crate
//!
//! Box presets and export preferences, stored as JSON or TOML in the
//! platform config directory.

pub mod config;
pub mod error;

pub use config::{BoxStyle, Config, ExportFormat, ExportSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
