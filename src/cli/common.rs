//! Shared plumbing for CLI commands: errors, exit codes, settings and output.

use crate::config::Config;
use crate::models::ViewMode;
use crate::nav::{self, manifest, NavContext};
use crate::policy::ConfigPolicy;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input (unknown mode, malformed key, invalid settings)
    ValidationError = 1,
    /// Reading or writing a file failed
    IoError = 2,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A failed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to report
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Create an I/O error
    pub fn io(msg: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: msg.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: msg.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads settings from `path`, or from the default location when `None`.
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let result = match path {
        Some(p) => Config::load_from(p),
        None => Config::load(),
    };
    result.map_err(|e| CliError::io(format!("Failed to load settings: {e:#}")))
}

/// Saves settings to `path`, or to the default location when `None`.
pub fn save_config(config: &Config, path: Option<&Path>) -> CliResult<()> {
    let result = match path {
        Some(p) => config.save_to(p),
        None => config.save(),
    };
    result.map_err(|e| CliError::io(format!("Failed to save settings: {e:#}")))
}

/// Builds the navigation context for the settings' user, or `user_override`.
pub fn build_context(config: &Config, user_override: Option<&str>) -> NavContext {
    let user = user_override.or(config.policy.current_user.as_deref());
    NavContext::for_user(user, &ConfigPolicy::new(&config.policy))
}

/// Resolves a mode from its friendly name.
///
/// An exact match wins; otherwise the name is matched ignoring ASCII case.
pub fn parse_mode(name: &str) -> CliResult<ViewMode> {
    let mode = nav::get_view_mode_for_friendly_name(name);
    if mode != ViewMode::None {
        return Ok(mode);
    }

    manifest::records()
        .iter()
        .find(|r| r.friendly_name.eq_ignore_ascii_case(name))
        .map(|r| r.view_mode)
        .ok_or_else(|| {
            CliError::validation(format!(
                "Unknown mode '{name}'. Run 'modes list' to see available modes"
            ))
        })
}

/// Prints `value` as a single line of JSON.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").exit_code.code(), 1);
        assert_eq!(CliError::io("x").exit_code.code(), 2);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("Scientific").unwrap(), ViewMode::Scientific);
        assert_eq!(parse_mode("scientific").unwrap(), ViewMode::Scientific);
        assert_eq!(parse_mode("weight and mass").unwrap(), ViewMode::Weight);
        assert!(parse_mode("None").is_err());
        assert!(parse_mode("Matrix").is_err());
    }

    #[test]
    fn test_build_context_user_override() {
        let mut config = Config::new();
        config.policy.known_users = vec!["student".to_string()];
        config.policy.allow_graphing_calculator = false;

        let context = build_context(&config, None);
        assert!(context.is_graphing_enabled());

        let context = build_context(&config, Some("student"));
        assert!(!context.is_graphing_enabled());
        assert_eq!(context.current_user(), Some("student"));

        config.policy.current_user = Some("student".to_string());
        let context = build_context(&config, Some("guest"));
        assert!(context.is_graphing_enabled());
    }
}
