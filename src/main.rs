//! Calculator Modes - inspect and persist calculator menu modes
//!
//! Command-line front end for the mode manifest: list modes, build the
//! localized menu, map accelerators, and save or restore the selected mode.

use calcmodes::branding::{APP_BINARY_NAME, APP_DISPLAY_NAME};
use calcmodes::cli::{
    CliResult, DeserializeArgs, ExitCode, KeysArgs, MenuArgs, ModesArgs, RestoreArgs, SelectArgs,
    SerializeArgs,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Calculator Modes - inspect and persist calculator menu modes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file to use instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect the mode manifest
    Modes(ModesArgs),
    /// Build the localized mode menu
    Menu(MenuArgs),
    /// Print the stable id of a mode
    Serialize(SerializeArgs),
    /// Resolve a stored value back to a mode
    Deserialize(DeserializeArgs),
    /// Inspect mode-switching accelerators
    Keys(KeysArgs),
    /// Remember a mode as the last selection
    Select(SelectArgs),
    /// Print the remembered mode
    Restore(RestoreArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = cli.config.as_deref();
    debug!("{} v{}", APP_DISPLAY_NAME, env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Command::Modes(args) => args.execute(),
        Command::Menu(args) => args.execute(config),
        Command::Serialize(args) => args.execute(),
        Command::Deserialize(args) => args.execute(config),
        Command::Keys(args) => args.execute(),
        Command::Select(args) => args.execute(config),
        Command::Restore(args) => args.execute(config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("For more options, run:");
        eprintln!("  {} --help", APP_BINARY_NAME);
        std::process::exit(e.exit_code.code());
    }

    std::process::exit(ExitCode::Success.code());
}
