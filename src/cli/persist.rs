//! Mode persistence commands: id conversion and saving/restoring the selection.

use crate::cli::common::{
    build_context, load_config, parse_mode, print_json, save_config, CliError, CliResult,
};
use crate::models::ViewMode;
use crate::nav;
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Print the stable id of a mode
#[derive(Debug, Clone, Args)]
pub struct SerializeArgs {
    /// Friendly name of the mode
    #[arg(value_name = "MODE")]
    pub mode: String,
}

/// Resolve a stored value back to a mode
#[derive(Debug, Clone, Args)]
pub struct DeserializeArgs {
    /// Stored value, read as TOML (e.g. 1, "1", 1.5)
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Evaluate policy for this user instead of the configured one
    #[arg(long, value_name = "ID")]
    pub user: Option<String>,
}

/// Remember a mode as the last selection
#[derive(Debug, Clone, Args)]
pub struct SelectArgs {
    /// Friendly name of the mode
    #[arg(value_name = "MODE")]
    pub mode: String,
}

/// Print the remembered mode
#[derive(Debug, Clone, Args)]
pub struct RestoreArgs {
    /// Evaluate policy for this user instead of the configured one
    #[arg(long, value_name = "ID")]
    pub user: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RestoreResponse {
    view_mode: ViewMode,
    friendly_name: String,
    stored: Option<String>,
}

impl SerializeArgs {
    /// Execute the serialize command
    pub fn execute(&self) -> CliResult<()> {
        let mode = parse_mode(&self.mode)?;
        println!("{}", nav::serialize(mode));
        Ok(())
    }
}

impl DeserializeArgs {
    /// Execute the deserialize command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let context = build_context(&config, self.user.as_deref());
        let value = parse_stored_value(&self.value)?;

        let mode = nav::deserialize_stored(&value, &context);
        println!("{}", nav::get_friendly_name(mode));
        Ok(())
    }
}

impl SelectArgs {
    /// Execute the select command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let mode = parse_mode(&self.mode)?;
        let mut config = load_config(config_path)?;

        let context = build_context(&config, None);
        if !nav::is_view_mode_enabled(mode, &context) {
            return Err(CliError::validation(format!(
                "Mode '{}' is disabled by policy",
                nav::get_friendly_name(mode)
            )));
        }

        config.remember_mode(mode);
        save_config(&config, config_path)?;

        println!("Selected {}.", nav::get_friendly_name(mode));
        Ok(())
    }
}

impl RestoreArgs {
    /// Execute the restore command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let context = build_context(&config, self.user.as_deref());
        let mode = config.restore_mode(&context);

        let response = RestoreResponse {
            view_mode: mode,
            friendly_name: nav::get_friendly_name(mode).to_string(),
            stored: config.navigation.last_mode.as_ref().map(ToString::to_string),
        };

        if self.json {
            return print_json(&response);
        }

        println!("{}", response.friendly_name);
        Ok(())
    }
}

/// Reads a command-line value the way it would appear in the settings file.
///
/// Text that is not a valid TOML value is kept as a string.
fn parse_stored_value(text: &str) -> CliResult<toml::Value> {
    let document = format!("value = {text}");
    match toml::from_str::<toml::Table>(&document) {
        Ok(mut table) => table
            .remove("value")
            .ok_or_else(|| CliError::validation(format!("Cannot read stored value '{text}'"))),
        Err(_) => Ok(toml::Value::String(text.to_string())),
    }
}
