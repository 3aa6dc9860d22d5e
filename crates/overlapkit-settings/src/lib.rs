//! OverlapKit Settings Crate
//!
//! Loads and persists engine configuration as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{default_config_path, ConfigFormat, OutputFormat, OutputSettings, Settings};
pub use error::{SettingsError, SettingsResult};
