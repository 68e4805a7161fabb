//! Plain text output formatter

use super::{ErrorEntry, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one rendered message per line
pub struct TextFormatter<W: Write> {
    writer: W,
    with_code: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter that prints messages only
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            with_code: false,
        }
    }

    /// Create a text formatter that prefixes each message with its code
    pub fn with_code(writer: W) -> Self {
        Self {
            writer,
            with_code: true,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, entry: &ErrorEntry) -> Result<()> {
        if self.with_code {
            writeln!(self.writer, "{:>5}\t{}", entry.code, entry.message)?;
        } else {
            // Messages keep their trailing whitespace
            writeln!(self.writer, "{}", entry.message)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
