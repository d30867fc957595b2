// SPDX-License-Identifier: MPL-2.0
//! Chat head configuration, loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[banner]` - Timing and layout of the banner
//! - `[gesture]` - Drag-to-dismiss tuning
//! - `[diagnostics]` - Presentation event log
//!
//! Missing keys take their default value, so a partial file is valid.
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to [`load_with_override`]
//! 2. `--config-dir` CLI argument (see [`init_cli_override`])
//! 3. `CHAT_HEADS_CONFIG_DIR` environment variable
//! 4. Platform config directory (`<config>/ChatHeads/`)
//!
//! # Examples
//!
//! ```no_run
//! use chat_heads::config;
//!
//! let (mut config, _warning) = config::load();
//! config.banner.dismiss_delay_ms = 4_000;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ChatHeads";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "CHAT_HEADS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

// =============================================================================
// Section Structs
// =============================================================================

/// Banner timing and layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BannerConfig {
    pub dismiss_delay_ms: u64,
    pub reveal_duration_ms: u64,
    pub hide_duration_ms: u64,
    pub inset_top: f32,
    pub inset_left: f32,
    pub inset_right: f32,
    pub offscreen_margin: f32,
    pub image_diameter: f32,
    pub image_padding: f32,
    pub corner_radius: f32,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            dismiss_delay_ms: DEFAULT_DISMISS_DELAY_MS,
            reveal_duration_ms: DEFAULT_REVEAL_DURATION_MS,
            hide_duration_ms: DEFAULT_HIDE_DURATION_MS,
            inset_top: DEFAULT_INSET_TOP,
            inset_left: DEFAULT_INSET_LEFT,
            inset_right: DEFAULT_INSET_RIGHT,
            offscreen_margin: DEFAULT_OFFSCREEN_MARGIN,
            image_diameter: DEFAULT_IMAGE_DIAMETER,
            image_padding: DEFAULT_IMAGE_PADDING,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

/// Drag-to-dismiss tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureConfig {
    /// Leftward drag distance past which releasing dismisses.
    pub threshold: f32,
    /// Resistance curve constant for rightward drags.
    pub damping: f32,
    pub fling_min_ms: u64,
    pub fling_max_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_GESTURE_THRESHOLD,
            damping: DEFAULT_DAMPING,
            fling_min_ms: DEFAULT_FLING_MIN_MS,
            fling_max_ms: DEFAULT_FLING_MAX_MS,
        }
    }
}

/// Presentation event log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

/// Chat head configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub banner: BannerConfig,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Records the `--config-dir` CLI argument. Only the first call has effect.
pub fn init_cli_override(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

/// Resolves the config directory, highest priority first.
#[must_use]
pub fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }
    if let Some(dir) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(dir);
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(override_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Never fails: returns the defaults plus a warning key when an existing
/// file cannot be read or parsed.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `override_dir` (or the default location).
pub fn load_with_override(override_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(override_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err.warning_key().to_string())),
    }
}

/// Loads configuration from a specific file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into `override_dir` (or the default location).
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save_with_override(config: &Config, override_dir: Option<PathBuf>) -> Result<()> {
    match config_path_with_override(override_dir) {
        Some(path) => save_to_path(config, &path),
        None => Ok(()),
    }
}

/// Saves configuration to a specific file, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
