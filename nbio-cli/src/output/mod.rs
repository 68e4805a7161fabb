//! Output formatting module

use anyhow::Result;
use nbio_core::{IoError, Reason, StrerrorLookup};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One rendered message per line
    #[default]
    Text,
    /// JSON array of rendered errors with their codes
    Json,
}

/// A rendered error as written by the formatters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// The OS failure code
    pub code: i32,
    /// Which explanation shape produced the message
    pub reason: ReasonKind,
    /// The rendered description
    pub message: String,
}

/// Explanation shape of a rendered error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasonKind {
    /// Rendered from the function name and the OS message table
    Function,
    /// Caller-supplied text
    Text,
}

impl ErrorEntry {
    /// Render `error` through `lookup`
    pub fn render<L: StrerrorLookup + ?Sized>(error: &IoError, lookup: &L) -> Self {
        let reason = match error.reason() {
            Reason::Function(_) => ReasonKind::Function,
            Reason::Text(_) => ReasonKind::Text,
        };
        let message = error.describe_with(lookup);
        log::trace!("Rendered errno {}: {message:?}", error.code());
        Self {
            code: error.code(),
            reason,
            message,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single rendered error
    fn format_entry(&mut self, entry: &ErrorEntry) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Build the formatter for `format` over `writer`
///
/// `with_code` prefixes text lines with the code; JSON always carries it.
pub fn formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
    with_code: bool,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text if with_code => Box::new(TextFormatter::with_code(writer)),
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_message(_: i32) -> Option<Vec<u8>> {
        None
    }

    #[test]
    fn test_render_function_entry() {
        let entry = ErrorEntry::render(&IoError::from_function(9999, "read"), &no_message);
        assert_eq!(entry.code, 9999);
        assert_eq!(entry.reason, ReasonKind::Function);
        assert_eq!(
            entry.message,
            "read failed: Broken strerror, unknown error: 9999"
        );
    }

    #[test]
    fn test_render_text_entry() {
        let entry = ErrorEntry::render(&IoError::from_text(5, "disk on fire"), &no_message);
        assert_eq!(entry.reason, ReasonKind::Text);
        assert_eq!(entry.message, "disk on fire");
    }

    #[test]
    fn test_formatter_selection() {
        let mut buf = Vec::new();
        {
            let mut out = formatter(OutputFormat::Json, &mut buf, false, true);
            out.format_entry(&ErrorEntry::render(
                &IoError::from_text(1, "x"),
                &no_message,
            ))
            .unwrap();
            out.finish().unwrap();
        }
        assert!(String::from_utf8(buf).unwrap().starts_with('['));
    }
}
