//! Menu construction command.

use crate::cli::common::{build_context, load_config, print_json, CliError, CliResult};
use crate::localization::StringTable;
use crate::models::NavCategoryGroup;
use crate::nav;
use clap::Args;
use std::path::{Path, PathBuf};

/// Build the localized mode menu
#[derive(Debug, Clone, Args)]
pub struct MenuArgs {
    /// Strings file overriding the built-in English text
    #[arg(long, value_name = "FILE")]
    pub strings: Option<PathBuf>,

    /// Evaluate policy for this user instead of the configured one
    #[arg(long, value_name = "ID")]
    pub user: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl MenuArgs {
    /// Execute the menu command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let context = build_context(&config, self.user.as_deref());

        let strings_file = self.strings.as_deref().or(config.ui.strings_file.as_deref());
        let strings = StringTable::embedded_with_overrides(strings_file)
            .map_err(|e| CliError::io(format!("Failed to load strings: {e:#}")))?;

        let mut groups = nav::create_menu_options(&strings);
        for group in &mut groups {
            group.apply_context(&context);
        }

        if self.json {
            return print_json(&groups);
        }

        for group in &groups {
            print_group(group);
        }
        Ok(())
    }
}

fn print_group(group: &NavCategoryGroup) {
    println!("{}", group.name);
    for item in &group.categories {
        let state = if item.is_enabled { "" } else { "  (disabled)" };
        println!("  [{}] {}{}", item.access_key, item.name, state);
    }
    println!();
}
