//! Configuration and settings management for FigureKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Style defaults applied to newly drawn figures
//! - Shape defaults (parameters not chosen interactively)
//! - Logging preferences

use crate::error::{SettingsError, SettingsResult};
use figurekit_core::{Color, LineType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Default style for new figures
///
/// Inside a `[style]` table an absent color means "no color"; the table
/// as a whole falls back to [`StyleDefaults::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDefaults {
    /// Fill color (none draws an unfilled figure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    /// Edge color (none draws no edge)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge: Option<Color>,
    /// Edge line type
    #[serde(default)]
    pub line_type: LineType,
    /// Edge line width
    #[serde(default = "default_line_width")]
    pub line_width: f64,
}

fn default_line_width() -> f64 {
    1.0
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            edge: Some(Color::BLACK),
            line_type: LineType::Solid,
            line_width: default_line_width(),
        }
    }
}

/// Parameters for shapes that are not set by dragging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDefaults {
    /// Number of sides of a newly drawn regular polygon
    pub polygon_sides: u32,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self { polygon_sides: 6 }
    }
}

/// Logging preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default level directive (`trace`, `debug`, `info`, `warn`, `error`)
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Style applied to new figures
    pub style: StyleDefaults,
    /// Shape parameters
    pub shapes: ShapeDefaults,
    /// Logging preferences
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(SettingsError::UnsupportedFormat(path.display().to_string()));
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::SaveError(format!("{}: {}", parent.display(), e)))?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.style.fill.is_none() && self.style.edge.is_none() {
            return Err(SettingsError::invalid(
                "style",
                "fill and edge colors cannot both be empty",
            ));
        }

        if !self.style.line_width.is_finite() || self.style.line_width < 0.0 {
            return Err(SettingsError::invalid(
                "style.line_width",
                format!("must be a finite non-negative number, got {}", self.style.line_width),
            ));
        }

        if self.shapes.polygon_sides < 3 {
            return Err(SettingsError::invalid(
                "shapes.polygon_sides",
                "must be at least 3",
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(SettingsError::invalid(
                "logging.level",
                format!("unknown level '{}'", self.logging.level),
            ));
        }

        Ok(())
    }
}

/// Platform-specific location of the configuration file
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("figurekit").join("config.toml"))
        .ok_or_else(|| {
            SettingsError::ConfigDirectory("no configuration directory on this platform".into())
        })
}
