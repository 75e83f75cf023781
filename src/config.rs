//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving the settings file in
//! TOML format with platform-specific directory resolution. The settings file
//! is also where the last selected mode is persisted.

use crate::branding::APP_DATA_DIR;
use crate::models::ViewMode;
use crate::nav::{self, NavContext, StoredModeId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Persisted navigation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NavigationConfig {
    /// Serialization id of the last selected mode.
    ///
    /// Kept untyped: older or hand-edited files may hold anything here, and a
    /// bad value must not stop the rest of the file from loading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_mode: Option<toml::Value>,
}

/// User identity and feature policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// User whose policy applies
    #[serde(default)]
    pub current_user: Option<String>,
    /// Users the policy can resolve
    #[serde(default)]
    pub known_users: Vec<String>,
    /// Whether known users may use the Graphing calculator
    #[serde(default = "default_allow_graphing")]
    pub allow_graphing_calculator: bool,
}

/// Graphing is allowed unless a policy says otherwise
fn default_allow_graphing() -> bool {
    true
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            current_user: None,
            known_users: Vec::new(),
            allow_graphing_calculator: default_allow_graphing(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Strings file overriding the built-in English text
    #[serde(default)]
    pub strings_file: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/calcmodes/config.toml`
/// - macOS: `~/Library/Application Support/calcmodes/config.toml`
/// - Windows: `%APPDATA%\calcmodes\config.toml`
///
/// # Validation
///
/// - `strings_file` must exist if set
/// - `current_user` must not be empty if set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Persisted navigation state
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// User and policy settings
    #[serde(default)]
    pub policy: PolicyConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validates configuration values.
    ///
    /// `ui.strings_file` is not checked here; the menu reports a missing
    /// strings file when it tries to read it.
    pub fn validate(&self) -> Result<()> {
        if self.policy.current_user.as_deref() == Some("") {
            anyhow::bail!("Current user cannot be empty");
        }

        Ok(())
    }

    /// Records `mode` as the last selected mode.
    ///
    /// Modes missing from the manifest clear the stored value.
    pub fn remember_mode(&mut self, mode: ViewMode) {
        let id = nav::serialize(mode);
        self.navigation.last_mode =
            (id != nav::NOT_FOUND).then(|| StoredModeId(id).into());
    }

    /// The last selected mode, or `ViewMode::None` if nothing usable is stored.
    #[must_use]
    pub fn restore_mode(&self, context: &NavContext) -> ViewMode {
        self.navigation
            .last_mode
            .as_ref()
            .map_or(ViewMode::None, |value| nav::deserialize_stored(value, context))
    }
}
