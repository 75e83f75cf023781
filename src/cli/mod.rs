//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the mode manifest,
//! menu construction and mode persistence.

pub mod common;
pub mod keys;
pub mod menu;
pub mod modes;
pub mod persist;

// Re-export types used by main.rs
pub use common::{CliError, CliResult, ExitCode};
pub use keys::KeysArgs;
pub use menu::MenuArgs;
pub use modes::ModesArgs;
pub use persist::{DeserializeArgs, RestoreArgs, SelectArgs, SerializeArgs};
