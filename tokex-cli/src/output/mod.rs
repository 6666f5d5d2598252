//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tokex_core::{Collision, TokenAttrs};

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single table entry
    fn format_entry(&mut self, record: &EntryRecord) -> Result<()>;

    /// Format and output a single collision
    fn format_collision(&mut self, collision: &CollisionRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// One table entry as it is printed
#[derive(Debug, Clone, Serialize)]
pub struct EntryRecord {
    /// Looked-up spelling
    pub key: String,
    /// File the token was found in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Byte offset of the token in that file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    /// Records of the entry
    pub entries: Vec<TokenAttrs>,
}

impl EntryRecord {
    /// Record for a plain table lookup
    pub fn new(key: &str, entries: &[TokenAttrs]) -> Self {
        Self {
            key: key.to_string(),
            file: None,
            offset: None,
            entries: entries.to_vec(),
        }
    }

    /// Attach the location the token was found at
    pub fn located(mut self, file: impl Into<String>, offset: usize) -> Self {
        self.file = Some(file.into());
        self.offset = Some(offset);
        self
    }
}

/// One collision as it is printed
#[derive(Debug, Clone, Serialize)]
pub struct CollisionRecord {
    pub key: String,
    pub previous: TokenAttrs,
    pub replacement: TokenAttrs,
    pub conflicting: bool,
}

impl From<&Collision> for CollisionRecord {
    fn from(c: &Collision) -> Self {
        Self {
            key: c.key.clone(),
            previous: c.previous.clone(),
            replacement: c.replacement.clone(),
            conflicting: c.is_conflicting(),
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated text, one entry per line
    Text,
    /// JSON array
    Json,
}

impl OutputFormat {
    /// Create the formatter for this format
    pub fn formatter(self, writer: Box<dyn Write + Send + Sync>) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        }
    }
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
