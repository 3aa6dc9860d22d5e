//! Configuration file handling for OverlapKit
//!
//! Settings are stored as JSON or TOML, chosen by file extension. A missing
//! section or key falls back to its default, so a config file only needs to
//! name what it changes:
//!
//! ```toml
//! [engine.tessellation]
//! curve_steps = 48
//!
//! [output]
//! format = "json"
//! ```

use overlapkit_geometry::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};

/// Upper bound on samples per curve segment.
pub const MAX_CURVE_STEPS: u32 = 10_000;

/// How resolved regions are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// SVG path data
    #[default]
    Svg,
    /// Structured JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Svg => write!(f, "svg"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Output preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// On-disk file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tessellation and overlap settings
    pub engine: EngineConfig,
    /// Output preferences
    pub output: OutputSettings,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let settings: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Load from `path` when given, otherwise from the default location if a
    /// file exists there, otherwise defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match default_config_path() {
            Ok(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> SettingsResult<()> {
        let steps = self.engine.tessellation.curve_steps;
        if steps == 0 {
            return Err(SettingsError::invalid(
                "engine.tessellation.curve_steps",
                "must be at least 1",
            ));
        }
        if steps > MAX_CURVE_STEPS {
            return Err(SettingsError::invalid(
                "engine.tessellation.curve_steps",
                format!("must be at most {}", MAX_CURVE_STEPS),
            ));
        }
        Ok(())
    }
}

/// `<config dir>/overlapkit/config.toml`, falling back to the home directory.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no config or home directory".to_string())
        })?;
    Ok(base.join("overlapkit").join("config.toml"))
}
