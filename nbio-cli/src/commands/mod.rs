//! CLI command implementations

use crate::config::CliConfig;
use anyhow::Result;
use clap::Subcommand;

pub mod describe;
pub mod generate_config;
pub mod table;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the description of a single failure code
    Describe(describe::DescribeArgs),

    /// Render descriptions for a range of failure codes
    Table(table::TableArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        match self {
            Commands::Describe(args) => args.execute(config),
            Commands::Table(args) => args.execute(config),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Give a function name from the command line the `'static` lifetime that
/// deferred errors require. Each command interns at most one name per run.
pub(crate) fn intern(name: &str) -> &'static str {
    Box::leak(name.to_owned().into_boxed_str())
}
