//! Table command implementation

use crate::commands::intern;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::lookup::LoggingLookup;
use crate::output::{self, ErrorEntry, OutputFormat};
use anyhow::Result;
use clap::Args;
use nbio_core::{IoError, StrerrorLookup, SystemStrerror};
use std::io::Write;
use std::ops::RangeInclusive;

/// Arguments for the table command
#[derive(Debug, Args)]
pub struct TableArgs {
    /// First code to render (default: from config, else 1)
    #[arg(long, value_name = "CODE", allow_negative_numbers = true)]
    pub from: Option<i32>,

    /// Last code to render (default: from config, else 133)
    #[arg(long, value_name = "CODE", allow_negative_numbers = true)]
    pub to: Option<i32>,

    /// Name of the failing function used in every row
    #[arg(short = 'n', long, value_name = "NAME")]
    pub function: Option<String>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl TableArgs {
    /// Execute the table command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let stdout = std::io::stdout();
        self.write_to(config, &LoggingLookup::new(SystemStrerror), stdout.lock())
    }

    /// Render every code in the range into `writer` using `lookup`
    pub fn write_to<L, W>(&self, config: &CliConfig, lookup: &L, writer: W) -> Result<()>
    where
        L: StrerrorLookup,
        W: Write,
    {
        let range = self.range(config)?;
        let function = self
            .function
            .as_deref()
            .unwrap_or(&config.describe.default_function);
        if function.is_empty() {
            return Err(CliError::EmptyFunction.into());
        }
        let function = intern(function);

        log::info!(
            "Rendering errno {}..={} as {function:?}",
            range.start(),
            range.end()
        );

        let format = self.format.unwrap_or(config.output.default_format);
        let mut out = output::formatter(format, writer, config.output.pretty_json, true);
        for code in range {
            let error = IoError::from_function(code, function);
            out.format_entry(&ErrorEntry::render(&error, lookup))?;
        }
        out.finish()
    }

    /// Resolve the inclusive code range from flags and config
    pub fn range(&self, config: &CliConfig) -> Result<RangeInclusive<i32>, CliError> {
        let from = self.from.unwrap_or(config.table.from);
        let to = self.to.unwrap_or(config.table.to);
        if from > to {
            return Err(CliError::InvalidRange { from, to });
        }
        Ok(from..=to)
    }
}
