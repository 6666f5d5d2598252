//! Scan command implementation

use anyhow::Result;
use clap::Args;
use std::io;

use crate::input::{resolve_patterns, FileReader};
use crate::language_source::LanguageArgs;
use crate::output::{EntryRecord, OutputFormat};

/// Characters stripped from both ends of a whitespace-separated word
const DELIMITERS: &[char] = &[
    ',', ';', ':', '(', ')', '[', ']', '{', '}', '"', '\'', '!', '?',
];

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        let table = self.language.source().load()?;
        let files = resolve_patterns(&self.input)?;
        let mut formatter = self.format.formatter(Box::new(io::stdout()));

        let mut matches = 0usize;
        for path in &files {
            log::info!("Scanning {}", path.display());
            let text = FileReader::read_text(path)?;
            let name = path.display().to_string();

            for (offset, token) in candidate_tokens(&text) {
                if let Some(entries) = table.get(token) {
                    matches += 1;
                    formatter
                        .format_entry(&EntryRecord::new(token, entries).located(&name, offset))?;
                }
            }
        }

        formatter.finish()?;
        log::info!("Found {matches} exception tokens in {} files", files.len());
        Ok(())
    }
}

/// Whitespace-separated words with surrounding delimiters removed
///
/// Yields the byte offset of each trimmed word. Trailing periods are kept,
/// since they are part of dotted abbreviations.
pub fn candidate_tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split(char::is_whitespace).filter_map(move |word| {
        let start = word.as_ptr() as usize - text.as_ptr() as usize;
        let trimmed_start = word.trim_start_matches(DELIMITERS);
        let token = trimmed_start.trim_end_matches(DELIMITERS);
        if token.is_empty() {
            return None;
        }
        Some((start + word.len() - trimmed_start.len(), token))
    })
}
