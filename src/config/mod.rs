//! Configuration system for yamlpick.
//!
//! This module provides the configuration structure for the `yamlpick` binary
//! with sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and merged with
//! command-line arguments. The library functions do not read it.
//!
//! # Example
//!
//! ```
//! use yamlpick::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert!(config.fail_on_missing);
//! assert_eq!(config.log_level, "warn");
//!
//! // Create custom configuration
//! let custom = Config {
//!     yaml_output: true,
//!     ..Config::default()
//! };
//! assert!(custom.yaml_output);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the yamlpick command.
///
/// # Fields
///
/// * `fail_on_missing` - Exit with status 1 when the path resolves to nothing (default: true)
/// * `max_document_size` - Largest input accepted, in bytes (default: 100MB)
/// * `log_level` - Log filter used when `RUST_LOG` is not set (default: "warn")
/// * `yaml_output` - Print results re-encoded as YAML instead of plain text (default: false)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Exit with status 1 when the path resolves to nothing
    #[serde(default = "default_fail_on_missing")]
    pub fail_on_missing: bool,

    /// Largest input accepted, in bytes
    #[serde(default = "default_max_document_size")]
    pub max_document_size: usize,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Print results re-encoded as YAML
    #[serde(default)]
    pub yaml_output: bool,
}

fn default_fail_on_missing() -> bool {
    true
}

/// Returns the default size limit (100MB).
fn default_max_document_size() -> usize {
    104_857_600
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fail_on_missing: default_fail_on_missing(),
            max_document_size: default_max_document_size(),
            log_level: default_log_level(),
            yaml_output: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamlpick/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamlpick");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "ignoring invalid config file");
                Self::default()
            }),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not read config file");
                Self::default()
            }
        }
    }

    /// Parses configuration from TOML text. Missing fields take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
