// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[display]` - Default canvas size used for crop geometry and rendering
//! - `[export]` - Output format and JPEG quality used when saving
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `CROP_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use crop_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.export.jpeg_quality = Some(75);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::editing::{CanvasSize, JpegQuality};
use crate::error::{Error, Result};
use crate::media::{ExportFormat, ExportSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Display Section
// =============================================================================

/// Canvas the CLI lays images out in when no UI supplies one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(
        default = "default_canvas_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub canvas_width: Option<u32>,

    #[serde(
        default = "default_canvas_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub canvas_height: Option<u32>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
        }
    }
}

impl DisplayConfig {
    /// Configured canvas, falling back to the default for missing axes.
    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        CanvasSize::new(
            self.canvas_width.unwrap_or(DEFAULT_CANVAS_WIDTH),
            self.canvas_height.unwrap_or(DEFAULT_CANVAS_HEIGHT),
        )
    }
}

// =============================================================================
// Export Section
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Format used when the output path has no extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<ExportFormat>,

    /// JPEG quality, clamped to 1-100 on use.
    #[serde(
        default = "default_jpeg_quality",
        skip_serializing_if = "Option::is_none"
    )]
    pub jpeg_quality: Option<u8>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: Some(ExportFormat::default()),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

impl ExportConfig {
    #[must_use]
    pub fn settings(&self) -> ExportSettings {
        ExportSettings {
            default_format: self.default_format.unwrap_or_default(),
            jpeg_quality: self
                .jpeg_quality
                .map(JpegQuality::new)
                .unwrap_or_default(),
        }
    }
}

// =============================================================================
// Main Config Structure
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

fn default_canvas_width() -> Option<u32> {
    Some(DEFAULT_CANVAS_WIDTH)
}

fn default_canvas_height() -> Option<u32> {
    Some(DEFAULT_CANVAS_HEIGHT)
}

fn default_jpeg_quality() -> Option<u8> {
    Some(DEFAULT_JPEG_QUALITY)
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads configuration from `base_dir` if given, otherwise from the default
/// location.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("Loaded config from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("{}; using defaults", err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|err| Error::Config(format!("{}: {}", path.display(), err)))
}

/// Saves configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
