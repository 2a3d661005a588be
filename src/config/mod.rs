// SPDX-License-Identifier: MPL-2.0
//! This module handles the banner configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[animation]` - Entrance/exit duration
//! - `[layout]` - Nominal banner heights
//! - `[drag]` - Drag resistance and dismiss threshold
//! - `[display]` - Default on-screen duration and status bar assumption
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `HERALD_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use herald::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow the animations down
//! config.animation.duration_ms = Some(600);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::banner::BannerSettings;
use crate::domain::banner::{
    DisplayDuration, DragTuning, HostMetrics, NominalHeight, TransitionDuration,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned by [`load`] when the file exists but cannot be parsed.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Entrance and exit animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Base duration of the slide in/out, in milliseconds.
    #[serde(
        default = "default_animation_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_animation_duration_ms(),
        }
    }
}

/// Banner geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Resting height with the status bar visible.
    #[serde(
        default = "default_height_status_bar_visible",
        skip_serializing_if = "Option::is_none"
    )]
    pub height_status_bar_visible: Option<f32>,

    /// Resting height with the status bar hidden.
    #[serde(
        default = "default_height_status_bar_hidden",
        skip_serializing_if = "Option::is_none"
    )]
    pub height_status_bar_hidden: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            height_status_bar_visible: default_height_status_bar_visible(),
            height_status_bar_hidden: default_height_status_bar_hidden(),
        }
    }
}

/// Drag interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DragConfig {
    /// Downward travel followed one-to-one.
    #[serde(
        default = "default_resistance_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub resistance_threshold: Option<f32>,

    /// Divisor applied past the threshold.
    #[serde(
        default = "default_resistance_divisor",
        skip_serializing_if = "Option::is_none"
    )]
    pub resistance_divisor: Option<f32>,

    /// Upward travel past which a release dismisses.
    #[serde(
        default = "default_dismiss_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_threshold: Option<f32>,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            resistance_threshold: default_resistance_threshold(),
            resistance_divisor: default_resistance_divisor(),
            dismiss_threshold: default_dismiss_threshold(),
        }
    }
}

/// Presentation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// On-screen duration used when content does not set one.
    #[serde(
        default = "default_display_duration_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_secs: Option<f64>,

    /// Whether the host hides its status bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_bar_hidden: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_display_duration_secs(),
            status_bar_hidden: Some(false),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Banner configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Animation settings.
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Layout settings.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Drag settings.
    #[serde(default)]
    pub drag: DragConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Runtime presenter settings, with every value clamped to its bounds.
    #[must_use]
    pub fn banner_settings(&self) -> BannerSettings {
        let transition = TransitionDuration::from_millis(
            self.animation
                .duration_ms
                .unwrap_or(DEFAULT_ANIMATION_DURATION_MS),
        );
        let drag = DragTuning::new(
            self.drag
                .resistance_threshold
                .unwrap_or(DEFAULT_RESISTANCE_THRESHOLD),
            self.drag
                .resistance_divisor
                .unwrap_or(DEFAULT_RESISTANCE_DIVISOR),
            self.drag
                .dismiss_threshold
                .unwrap_or(DEFAULT_DISMISS_THRESHOLD),
        );

        BannerSettings {
            transition,
            drag,
            height_status_bar_visible: NominalHeight::new(
                self.layout
                    .height_status_bar_visible
                    .unwrap_or(DEFAULT_HEIGHT_STATUS_BAR_VISIBLE),
            ),
            height_status_bar_hidden: NominalHeight::new(
                self.layout
                    .height_status_bar_hidden
                    .unwrap_or(DEFAULT_HEIGHT_STATUS_BAR_HIDDEN),
            ),
        }
    }

    /// Display duration for content that does not set its own.
    #[must_use]
    pub fn default_content_duration(&self) -> DisplayDuration {
        DisplayDuration::from_secs_f64(
            self.display
                .default_duration_secs
                .unwrap_or(DEFAULT_DISPLAY_DURATION_SECS),
        )
    }

    /// Host metrics for a window of `width`.
    #[must_use]
    pub fn host_metrics(&self, width: f32) -> HostMetrics {
        HostMetrics::new(width, self.display.status_bar_hidden.unwrap_or(false))
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_animation_duration_ms() -> Option<u64> {
    Some(DEFAULT_ANIMATION_DURATION_MS)
}

fn default_height_status_bar_visible() -> Option<f32> {
    Some(DEFAULT_HEIGHT_STATUS_BAR_VISIBLE)
}

fn default_height_status_bar_hidden() -> Option<f32> {
    Some(DEFAULT_HEIGHT_STATUS_BAR_HIDDEN)
}

fn default_resistance_threshold() -> Option<f32> {
    Some(DEFAULT_RESISTANCE_THRESHOLD)
}

fn default_resistance_divisor() -> Option<f32> {
    Some(DEFAULT_RESISTANCE_DIVISOR)
}

fn default_dismiss_threshold() -> Option<f32> {
    Some(DEFAULT_DISMISS_THRESHOLD)
}

fn default_display_duration_secs() -> Option<f64> {
    Some(DEFAULT_DISPLAY_DURATION_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
