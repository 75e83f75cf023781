//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use calcmodes::config::{Config, PolicyConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the calcmodes binary (set by cargo at compile time)
pub fn calcmodes_bin() -> &'static str {
    env!("CARGO_BIN_EXE_calcmodes")
}

/// Runs the binary with `args`, isolated from the user's real settings.
pub fn run(config_path: &Path, args: &[&str]) -> Output {
    Command::new(calcmodes_bin())
        .arg("--config")
        .arg(config_path)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Trimmed stdout of a finished command.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A settings path inside a fresh temp dir; the file itself is not created.
pub fn empty_config() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    (config_path, temp_dir)
}

/// Settings where user "student" is denied the Graphing calculator.
pub fn restricted_config() -> Config {
    Config {
        policy: PolicyConfig {
            current_user: Some("student".to_string()),
            known_users: vec!["student".to_string()],
            allow_graphing_calculator: false,
        },
        ..Config::default()
    }
}

/// Writes `config` to a temp settings file.
pub fn create_temp_config_file(config: &Config) -> (PathBuf, TempDir) {
    let (config_path, temp_dir) = empty_config();
    config.save_to(&config_path).expect("Failed to write config file");
    (config_path, temp_dir)
}

/// Writes raw TOML to a temp settings file.
pub fn create_raw_config_file(content: &str) -> (PathBuf, TempDir) {
    let (config_path, temp_dir) = empty_config();
    fs::write(&config_path, content).expect("Failed to write config file");
    (config_path, temp_dir)
}
