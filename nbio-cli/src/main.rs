//! Command-line entry point for nbio

use anyhow::Result;
use clap::Parser;
use nbio_cli::commands::Commands;
use nbio_cli::config::CliConfig;
use nbio_cli::logging;
use std::path::PathBuf;
use std::process::ExitCode;

/// Render OS failure codes as nbio-core describes them
#[derive(Debug, Parser)]
#[command(name = "nbio", version, about)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "NBIO_CONFIG")]
    config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    log::debug!("Arguments: {cli:?}");
    cli.command.execute(&config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
