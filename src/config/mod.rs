// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file that is written with the defaults on first launch.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[tabs]` - Category strip starting offset and paging step
//! - `[grid]` - Card sizing and warm preview budget
//! - `[catalog]` - Optional path to a user catalogue file
//!
//! Numeric settings are stored as written and clamped to their valid range
//! when read through the section accessors, so a hand-edited file with an
//! out-of-range value still yields a usable layout.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TUBEGRID_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use tubegrid::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! // Write it out if the user has no settings file yet
//! config::save_if_missing(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Category tab strip settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TabsConfig {
    /// Offset (px) the strip starts at.
    #[serde(
        default = "default_initial_translate",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_translate: Option<f32>,

    /// Distance (px) one paging click moves the strip.
    #[serde(default = "default_page_step", skip_serializing_if = "Option::is_none")]
    pub page_step: Option<f32>,
}

impl TabsConfig {
    /// Starting offset, never negative.
    #[must_use]
    pub fn initial_translate(&self) -> f32 {
        self.initial_translate
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_INITIAL_TRANSLATE)
            .max(0.0)
    }

    /// Paging step clamped to `[MIN_PAGE_STEP, MAX_PAGE_STEP]`.
    #[must_use]
    pub fn page_step(&self) -> f32 {
        self.page_step
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_PAGE_STEP)
            .clamp(MIN_PAGE_STEP, MAX_PAGE_STEP)
    }
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            initial_translate: default_initial_translate(),
            page_step: default_page_step(),
        }
    }
}

/// Video grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    /// Minimum width (px) of a card before a column is dropped.
    #[serde(
        default = "default_min_card_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_card_width: Option<f32>,

    /// How many hovered cards keep their preview decoder alive.
    #[serde(
        default = "default_max_warm_previews",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_warm_previews: Option<usize>,
}

impl GridConfig {
    /// Minimum card width clamped to `[MIN_CARD_WIDTH, MAX_CARD_WIDTH]`.
    #[must_use]
    pub fn min_card_width(&self) -> f32 {
        self.min_card_width
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_MIN_CARD_WIDTH)
            .clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH)
    }

    /// Warm preview budget clamped to `[MIN_WARM_PREVIEWS, MAX_WARM_PREVIEWS]`.
    #[must_use]
    pub fn max_warm_previews(&self) -> usize {
        self.max_warm_previews
            .unwrap_or(DEFAULT_MAX_WARM_PREVIEWS)
            .clamp(MIN_WARM_PREVIEWS, MAX_WARM_PREVIEWS)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_card_width: default_min_card_width(),
            max_warm_previews: default_max_warm_previews(),
        }
    }
}

/// Catalogue source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogConfig {
    /// User catalogue file. The embedded catalogue is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Category tab strip settings.
    #[serde(default)]
    pub tabs: TabsConfig,

    /// Video grid settings.
    #[serde(default)]
    pub grid: GridConfig,

    /// Catalogue source settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_initial_translate() -> Option<f32> {
    Some(DEFAULT_INITIAL_TRANSLATE)
}

fn default_page_step() -> Option<f32> {
    Some(DEFAULT_PAGE_STEP)
}

fn default_min_card_width() -> Option<f32> {
    Some(DEFAULT_MIN_CARD_WIDTH)
}

fn default_max_warm_previews() -> Option<usize> {
    Some(DEFAULT_MAX_WARM_PREVIEWS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable {}: {err}", path.display());
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
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Writes `config` to the default path unless a settings file exists.
///
/// Returns whether a file was written. An existing file is never touched,
/// even if it failed to parse.
pub fn save_if_missing(config: &Config) -> Result<bool> {
    save_if_missing_with_override(config, None)
}

/// Same as [`save_if_missing`] for a custom directory.
pub fn save_if_missing_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<bool> {
    match get_config_path_with_override(base_dir) {
        Some(path) if !path.exists() => {
            save_to_path(config, &path)?;
            Ok(true)
        }
        _ => Ok(false),
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            tabs: TabsConfig {
                initial_translate: Some(0.0),
                page_step: Some(120.0),
            },
            grid: GridConfig {
                min_card_width: Some(240.0),
                max_warm_previews: Some(2),
            },
            catalog: CatalogConfig {
                path: Some(PathBuf::from("/tmp/catalog.toml")),
            },
        }
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = sample_config();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("expected")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.tabs.initial_translate(), DEFAULT_INITIAL_TRANSLATE);
        assert_eq!(config.tabs.page_step(), DEFAULT_PAGE_STEP);
        assert_eq!(config.grid.min_card_width(), DEFAULT_MIN_CARD_WIDTH);
        assert_eq!(config.grid.max_warm_previews(), DEFAULT_MAX_WARM_PREVIEWS);
        assert_eq!(config.catalog.path, None);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"es\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("es"));
        assert_eq!(config.tabs, TabsConfig::default());
        assert_eq!(config.grid, GridConfig::default());
    }

    #[test]
    fn out_of_range_values_are_clamped_on_read() {
        let config: Config = toml::from_str(
            "[tabs]\ninitial_translate = -50.0\npage_step = 5.0\n\n[grid]\nmin_card_width = 5000.0\nmax_warm_previews = 0\n",
        )
        .expect("parse");

        assert_eq!(config.tabs.initial_translate(), 0.0);
        assert_eq!(config.tabs.page_step(), MIN_PAGE_STEP);
        assert_eq!(config.grid.min_card_width(), MAX_CARD_WIDTH);
        assert_eq!(config.grid.max_warm_previews(), MIN_WARM_PREVIEWS);
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn save_if_missing_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = sample_config();

        let written = save_if_missing_with_override(&config, Some(base_dir.clone()))
            .expect("save should succeed");
        assert!(written);

        let expected_path = base_dir.join("settings.toml");
        assert!(expected_path.exists(), "config file should exist");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.tabs.page_step(), 120.0);
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn save_if_missing_keeps_an_existing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let written = save_if_missing_with_override(&sample_config(), Some(base_dir))
            .expect("save should succeed");
        assert!(!written);
        assert_eq!(
            fs::read_to_string(&config_path).expect("read"),
            "not = valid = toml"
        );
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error")
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save");
        let content = fs::read_to_string(&config_path).expect("read");

        assert!(content.contains("[general]"));
        assert!(content.contains("[tabs]"));
        assert!(content.contains("[grid]"));
        assert!(!content.contains("path ="), "unset catalogue path is omitted");
    }
}
