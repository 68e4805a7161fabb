//! Describe command implementation

use crate::commands::intern;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::lookup::LoggingLookup;
use crate::output::{self, ErrorEntry, OutputFormat};
use anyhow::Result;
use clap::Args;
use nbio_core::{IoError, StrerrorLookup, SystemStrerror};
use std::io::Write;

/// Arguments for the describe command
#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// OS failure code (errno)
    #[arg(allow_negative_numbers = true)]
    pub code: i32,

    /// Name of the failing function; the message comes from the OS
    #[arg(short = 'n', long, value_name = "NAME", conflicts_with = "text")]
    pub function: Option<String>,

    /// Preformatted explanation, printed verbatim
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl DescribeArgs {
    /// Execute the describe command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let stdout = std::io::stdout();
        self.write_to(config, &LoggingLookup::new(SystemStrerror), stdout.lock())
    }

    /// Render into `writer` using `lookup`
    pub fn write_to<L, W>(&self, config: &CliConfig, lookup: &L, writer: W) -> Result<()>
    where
        L: StrerrorLookup,
        W: Write,
    {
        let error = self.build_error(config)?;
        log::debug!("Describing {error:?}");

        let format = self.format.unwrap_or(config.output.default_format);
        let mut out = output::formatter(format, writer, config.output.pretty_json, false);
        out.format_entry(&ErrorEntry::render(&error, lookup))?;
        out.finish()
    }

    fn build_error(&self, config: &CliConfig) -> Result<IoError, CliError> {
        if let Some(text) = &self.text {
            return Ok(IoError::from_text(self.code, text.clone()));
        }

        let function = self
            .function
            .as_deref()
            .unwrap_or(&config.describe.default_function);
        if function.is_empty() {
            return Err(CliError::EmptyFunction);
        }
        Ok(IoError::from_function(self.code, intern(function)))
    }
}
