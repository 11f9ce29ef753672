// SPDX-License-Identifier: MPL-2.0
//! This module handles the service configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use message_service::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Run without a display
//! config.headless = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred locale, e.g. `fr` or `en-US`.
    pub language: Option<String>,
    /// Replaces the localized product name in dialog titles.
    #[serde(default)]
    pub product_name: Option<String>,
    /// Show full failure chains in warnings.
    #[serde(default)]
    pub verbose_failures: Option<bool>,
    /// Log notifications instead of showing them.
    #[serde(default)]
    pub headless: Option<bool>,
    /// Forces right-to-left (`true`) or left-to-right (`false`) layout
    /// instead of deriving it from the locale.
    #[serde(default)]
    pub right_to_left: Option<bool>,
}

impl Config {
    #[must_use]
    pub fn verbose_failures(&self) -> bool {
        self.verbose_failures.unwrap_or(DEFAULT_VERBOSE_FAILURES)
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless.unwrap_or(DEFAULT_HEADLESS)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file; unparsable content yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file; using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
