//! JSON output formatter

use super::{ErrorEntry, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs rendered errors as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<ErrorEntry>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, entry: &ErrorEntry) -> Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ReasonKind;

    #[test]
    fn test_compact_array() {
        let mut buf = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buf, false);
        formatter
            .format_entry(&ErrorEntry {
                code: 9999,
                reason: ReasonKind::Function,
                message: "read failed: Broken strerror, unknown error: 9999".to_string(),
            })
            .unwrap();
        formatter.finish().unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[{\"code\":9999,\"reason\":\"function\",\"message\":\"read failed: Broken strerror, unknown error: 9999\"}]\n"
        );
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut buf = Vec::new();
        JsonFormatter::new(&mut buf, true).finish().unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }

    #[test]
    fn test_pretty_round_trips() {
        let entry = ErrorEntry {
            code: 3,
            reason: ReasonKind::Text,
            message: "custom".to_string(),
        };
        let mut buf = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buf, true);
        formatter.format_entry(&entry).unwrap();
        formatter.finish().unwrap();

        let parsed: Vec<ErrorEntry> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, vec![entry]);
    }
}
