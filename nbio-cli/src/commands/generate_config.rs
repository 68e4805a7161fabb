//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it with:");
        println!("   nbio --config {} table", self.output.display());

        Ok(())
    }
}

/// Commented template holding the default configuration values
pub fn generate_template() -> String {
    let defaults = CliConfig::default();
    format!(
        r#"# nbio configuration

[describe]
# Function named in deferred messages when --function is not given
default_function = "{}"

[output]
# "text" or "json"
default_format = "text"
pretty_json = {}

[table]
# Inclusive range of codes rendered by `nbio table`
from = {}
to = {}
"#,
        defaults.describe.default_function,
        defaults.output.pretty_json,
        defaults.table.from,
        defaults.table.to
    )
}
