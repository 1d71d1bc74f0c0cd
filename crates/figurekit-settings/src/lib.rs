//! FigureKit Settings Crate
//!
//! Handles figure defaults (style, shape parameters) and logging
//! configuration, with JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, LoggingSettings, ShapeDefaults, StyleDefaults};
pub use error::{SettingsError, SettingsResult};
