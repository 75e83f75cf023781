//! Accelerator key commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::{ViewMode, VirtualKey};
use crate::nav;
use crate::shortcuts::{AcceleratorRegistry, KeyBinding};
use clap::{Args, Subcommand};
use serde::Serialize;

/// Inspect mode-switching accelerators
#[derive(Debug, Clone, Args)]
pub struct KeysArgs {
    /// Keys subcommand
    #[command(subcommand)]
    pub command: KeysCommand,
}

/// Accelerator subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum KeysCommand {
    /// List all accelerators and their modes
    List(ListKeysArgs),
    /// Find the mode bound to a key (e.g. "alt+2" or "2")
    Lookup(LookupKeyArgs),
}

/// List all accelerators and their modes
#[derive(Debug, Clone, Args)]
pub struct ListKeysArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Find the mode bound to a key
#[derive(Debug, Clone, Args)]
pub struct LookupKeyArgs {
    /// Key to look up
    #[arg(value_name = "KEY")]
    pub key: String,
}

#[derive(Debug, Serialize)]
struct KeyItem {
    key: String,
    virtual_key: VirtualKey,
    view_mode: ViewMode,
    friendly_name: &'static str,
}

impl KeysArgs {
    /// Execute the keys command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            KeysCommand::List(args) => args.execute(),
            KeysCommand::Lookup(args) => args.execute(),
        }
    }
}

impl ListKeysArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let mut keys = Vec::new();
        nav::get_category_accelerator_keys(&mut keys);

        let items: Vec<KeyItem> = keys
            .into_iter()
            .map(|key| {
                let mode = nav::get_view_mode_for_virtual_key(key);
                KeyItem {
                    key: key.to_string(),
                    virtual_key: key,
                    view_mode: mode,
                    friendly_name: nav::get_friendly_name(mode),
                }
            })
            .collect();

        if self.json {
            return print_json(&items);
        }

        for item in items {
            println!("  {:<6} {}", item.key, item.friendly_name);
        }
        Ok(())
    }
}

impl LookupKeyArgs {
    /// Execute the lookup command
    pub fn execute(&self) -> CliResult<()> {
        let binding = KeyBinding::parse(&self.key).ok_or_else(|| {
            CliError::validation(format!(
                "Cannot parse key '{}'. Use a digit, optionally prefixed with 'alt+'",
                self.key
            ))
        })?;

        let registry = AcceleratorRegistry::new();
        let mode = nav::get_view_mode_for_virtual_key(registry.lookup_binding(binding));
        println!("{}", nav::get_friendly_name(mode));
        Ok(())
    }
}
