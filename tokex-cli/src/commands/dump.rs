//! Dump command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::language_source::LanguageArgs;
use crate::output::{CollisionRecord, EntryRecord, OutputFormat};

/// Arguments for the dump command
#[derive(Debug, Args)]
pub struct DumpArgs {
    #[command(flatten)]
    pub language: LanguageArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// List overwritten keys instead of entries
    #[arg(long)]
    pub collisions: bool,
}

impl DumpArgs {
    /// Execute the dump command
    pub fn execute(&self) -> Result<()> {
        let table = self.language.source().load()?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = self.format.formatter(writer);

        if self.collisions {
            for collision in table.collisions() {
                formatter.format_collision(&CollisionRecord::from(collision))?;
            }
        } else {
            for key in table.sorted_keys() {
                if let Some(entries) = table.get(key) {
                    formatter.format_entry(&EntryRecord::new(key, entries))?;
                }
            }
        }

        formatter.finish()?;
        log::info!(
            "Dumped {} keys ({} collisions) for '{}'",
            table.len(),
            table.collisions().len(),
            table.language_code()
        );
        Ok(())
    }
}
