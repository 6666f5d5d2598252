//! JSON output formatter

use super::{CollisionRecord, EntryRecord, OutputFormatter};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - buffers records and writes a single JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    items: Vec<Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            items: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, record: &EntryRecord) -> Result<()> {
        self.items.push(serde_json::to_value(record)?);
        Ok(())
    }

    fn format_collision(&mut self, collision: &CollisionRecord) -> Result<()> {
        self.items.push(serde_json::to_value(collision)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.items)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokex_core::TokenAttrs;

    #[test]
    fn test_json_array() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out);
            formatter
                .format_entry(&EntryRecord::new(
                    "км",
                    &[TokenAttrs::new("км", "километар", "километар")],
                ))
                .unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["key"], "км");
        assert_eq!(parsed[0]["entries"][0]["LEMMA"], "километар");
        assert!(parsed[0].get("file").is_none());
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }
}
