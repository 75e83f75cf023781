//! Mode listing and inspection commands.

use crate::cli::common::{parse_mode, print_json, CliResult};
use crate::models::{CategoryGroupType, CategoryRecord, ViewMode};
use crate::nav::{self, manifest};
use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;

/// Inspect the mode manifest
#[derive(Debug, Clone, Args)]
pub struct ModesArgs {
    /// Modes subcommand
    #[command(subcommand)]
    pub command: ModesCommand,
}

/// Mode subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum ModesCommand {
    /// List modes in menu order
    List(ListModesArgs),
    /// Show every lookup for one mode
    Show(ShowModeArgs),
}

/// Group filter accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupFilter {
    /// Calculator modes
    Calculator,
    /// Converter modes
    Converter,
}

impl From<GroupFilter> for CategoryGroupType {
    fn from(filter: GroupFilter) -> Self {
        match filter {
            GroupFilter::Calculator => Self::Calculator,
            GroupFilter::Converter => Self::Converter,
        }
    }
}

/// List modes in menu order
#[derive(Debug, Clone, Args)]
pub struct ListModesArgs {
    /// Only list modes of this group
    #[arg(long, value_enum)]
    pub group: Option<GroupFilter>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show every lookup for one mode
#[derive(Debug, Clone, Args)]
pub struct ShowModeArgs {
    /// Friendly name of the mode (e.g. "Scientific")
    #[arg(value_name = "MODE")]
    pub mode: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ModeItem {
    friendly_name: String,
    view_mode: ViewMode,
    id: i32,
    group: CategoryGroupType,
    accelerator: Option<String>,
    supports_negative: bool,
}

impl From<&CategoryRecord> for ModeItem {
    fn from(record: &CategoryRecord) -> Self {
        Self {
            friendly_name: record.friendly_name.to_string(),
            view_mode: record.view_mode,
            id: record.serialization_id,
            group: record.group_type,
            accelerator: record.virtual_key.digit().map(|_| record.virtual_key.to_string()),
            supports_negative: record.supports_negative,
        }
    }
}

#[derive(Debug, Serialize)]
struct ListModesResponse {
    modes: Vec<ModeItem>,
    count: usize,
}

#[derive(Debug, Serialize)]
struct ModeDetails {
    friendly_name: String,
    view_mode: ViewMode,
    id: i32,
    group: CategoryGroupType,
    position: i32,
    index: i32,
    index_in_group: i32,
    flat_index: i32,
    accelerator: Option<String>,
    name_resource_key: Option<String>,
    is_calculator: bool,
    is_converter: bool,
}

impl ModesArgs {
    /// Execute the modes command
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ModesCommand::List(args) => args.execute(),
            ModesCommand::Show(args) => args.execute(),
        }
    }
}

impl ListModesArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let group = self.group.map(CategoryGroupType::from);
        let modes: Vec<ModeItem> = manifest::records()
            .iter()
            .filter(|r| group.is_none_or(|g| r.group_type == g))
            .map(ModeItem::from)
            .collect();

        let response = ListModesResponse {
            count: modes.len(),
            modes,
        };

        if self.json {
            return print_json(&response);
        }

        println!("Modes ({}):", response.count);
        println!();
        for mode in response.modes {
            println!(
                "  {:>2}  {:<18} {:<11} {}",
                mode.id,
                mode.friendly_name,
                mode.group,
                mode.accelerator.unwrap_or_default()
            );
        }
        Ok(())
    }
}

impl ShowModeArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let mode = parse_mode(&self.mode)?;
        let group = nav::get_group_type(mode);
        let details = ModeDetails {
            friendly_name: nav::get_friendly_name(mode).to_string(),
            view_mode: mode,
            id: nav::serialize(mode),
            group,
            position: nav::get_position(mode),
            index: nav::get_index(mode),
            index_in_group: nav::get_index_in_group(mode, group),
            flat_index: nav::get_flat_index(mode),
            accelerator: manifest::find(mode)
                .and_then(|r| r.virtual_key.digit().map(|_| r.virtual_key.to_string())),
            name_resource_key: nav::get_name_resource_key(mode),
            is_calculator: nav::is_calculator_mode(mode),
            is_converter: nav::is_converter_mode(mode),
        };

        if self.json {
            return print_json(&details);
        }

        println!("{}", details.friendly_name);
        println!("  id:                {}", details.id);
        println!("  group:             {}", details.group);
        println!("  position:          {}", details.position);
        println!("  index:             {}", details.index);
        println!("  index in group:    {}", details.index_in_group);
        println!("  flat index:        {}", details.flat_index);
        println!(
            "  accelerator:       {}",
            details.accelerator.as_deref().unwrap_or("-")
        );
        println!(
            "  name resource key: {}",
            details.name_resource_key.as_deref().unwrap_or("-")
        );
        Ok(())
    }
}
