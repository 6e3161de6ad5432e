// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! hand-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[server]` - Build service location and request timeout
//! - `[persistence]` - Input autosave interval
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `DTB_CLIENT_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use dtb_client::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("building trees at {}", config.server.build_url());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Location of the tree building service.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Base URL the build endpoint path is appended to.
    #[serde(default = "default_server_url")]
    pub base_url: Option<String>,

    /// Upper bound for one build request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_server_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_SERVER_URL)
            .trim_end_matches('/')
    }

    /// Full URL of the build endpoint.
    #[must_use]
    pub fn build_url(&self) -> String {
        format!("{}{}", self.base_url(), BUILD_ENDPOINT_PATH)
    }

    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Input autosave settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PersistenceConfig {
    /// Seconds between two saves of the input fields.
    #[serde(default = "default_autosave_interval_secs")]
    pub autosave_interval_secs: Option<u64>,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            autosave_interval_secs: default_autosave_interval_secs(),
        }
    }
}

impl PersistenceConfig {
    /// Autosave interval, clamped to the supported range.
    #[must_use]
    pub fn autosave_interval(&self) -> Duration {
        let secs = self
            .autosave_interval_secs
            .unwrap_or(DEFAULT_AUTOSAVE_INTERVAL_SECS)
            .clamp(MIN_AUTOSAVE_INTERVAL_SECS, MAX_AUTOSAVE_INTERVAL_SECS);
        Duration::from_secs(secs)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub persistence: PersistenceConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_server_url() -> Option<String> {
    Some(DEFAULT_SERVER_URL.to_string())
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_autosave_interval_secs() -> Option<u64> {
    Some(DEFAULT_AUTOSAVE_INTERVAL_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
                    tracing::warn!(path = %path.display(), "failed to load config: {err}");
                    return (
                        Config::default(),
                        Some("Settings file is invalid, using defaults.".to_string()),
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
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_every_section() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\ntheme_mode = \"light\"\n\n\
             [server]\nbase_url = \"http://trees.example:8080\"\nrequest_timeout_secs = 15\n\n\
             [persistence]\nautosave_interval_secs = 10\n",
        )
        .expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(
            loaded,
            Config {
                general: GeneralConfig {
                    theme_mode: ThemeMode::Light,
                },
                server: ServerConfig {
                    base_url: Some("http://trees.example:8080".to_string()),
                    request_timeout_secs: Some(15),
                },
                persistence: PersistenceConfig {
                    autosave_interval_secs: Some(10),
                },
            }
        );
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "this is not = [valid").expect("write");

        match load_from_path(&config_path) {
            Err(crate::error::Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.server.base_url(), DEFAULT_SERVER_URL);
        assert_eq!(
            config.server.request_timeout(),
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(
            config.persistence.autosave_interval(),
            Duration::from_secs(DEFAULT_AUTOSAVE_INTERVAL_SECS)
        );
    }

    #[test]
    fn build_url_joins_base_and_endpoint() {
        let server = ServerConfig {
            base_url: Some("http://localhost:5001/".to_string()),
            ..ServerConfig::default()
        };
        assert_eq!(server.build_url(), "http://localhost:5001/build_tree");
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        let server = ServerConfig {
            base_url: Some("   ".to_string()),
            ..ServerConfig::default()
        };
        assert_eq!(server.base_url(), DEFAULT_SERVER_URL);
    }

    #[test]
    fn out_of_range_durations_are_clamped() {
        let server = ServerConfig {
            request_timeout_secs: Some(0),
            ..ServerConfig::default()
        };
        assert_eq!(
            server.request_timeout(),
            Duration::from_secs(MIN_REQUEST_TIMEOUT_SECS)
        );

        let persistence = PersistenceConfig {
            autosave_interval_secs: Some(1_000_000),
        };
        assert_eq!(
            persistence.autosave_interval(),
            Duration::from_secs(MAX_AUTOSAVE_INTERVAL_SECS)
        );
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[server]\nbase_url = \"http://10.0.0.2:5001\"\n")
            .expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.server.base_url(), "http://10.0.0.2:5001");
        assert_eq!(
            loaded.server.request_timeout_secs,
            Some(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(loaded.persistence, PersistenceConfig::default());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }
}
