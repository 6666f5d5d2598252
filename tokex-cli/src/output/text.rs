//! Plain text output formatter

use super::{CollisionRecord, EntryRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use tokex_core::Attr;

/// Plain text formatter - one tab-separated line per entry
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_entry(&mut self, record: &EntryRecord) -> Result<()> {
        if let (Some(file), Some(offset)) = (&record.file, record.offset) {
            write!(self.writer, "{file}:{offset}\t")?;
        }
        write!(self.writer, "{}", record.key)?;
        for attrs in &record.entries {
            for attr in Attr::ALL {
                write!(self.writer, "\t{attr}={}", attrs.get(attr))?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_collision(&mut self, collision: &CollisionRecord) -> Result<()> {
        let kind = if collision.conflicting {
            "conflicting"
        } else {
            "duplicate"
        };
        writeln!(
            self.writer,
            "{}\t{}\t{} -> {}",
            collision.key, kind, collision.previous.lemma, collision.replacement.lemma
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokex_core::TokenAttrs;

    #[test]
    fn test_entry_line() {
        let mut out = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut out);
            let record = EntryRecord::new("бр.", &[TokenAttrs::new("бр.", "број", "број")]);
            formatter.format_entry(&record).unwrap();
            formatter.finish().unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "бр.\tORTH=бр.\tLEMMA=број\tNORM=број\n");
    }

    #[test]
    fn test_located_entry_line() {
        let mut out = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut out);
            let record = EntryRecord::new("др", &[TokenAttrs::new("др", "доктор", "доктор")])
                .located("a.txt", 7);
            formatter.format_entry(&record).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("a.txt:7\tдр\t"));
    }
}
