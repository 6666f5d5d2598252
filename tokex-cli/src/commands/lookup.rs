//! Lookup command implementation

use anyhow::Result;
use clap::Args;
use std::io;

use crate::error::CliError;
use crate::language_source::LanguageArgs;
use crate::output::{EntryRecord, OutputFormat};

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Tokens to look up (exact, case-sensitive)
    #[arg(value_name = "TOKEN", required = true)]
    pub tokens: Vec<String>,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Succeed even if some tokens have no entry
    #[arg(long)]
    pub allow_missing: bool,
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self) -> Result<()> {
        let table = self.language.source().load()?;
        let mut formatter = self.format.formatter(Box::new(io::stdout()));

        let mut missing = Vec::new();
        for token in &self.tokens {
            match table.get(token) {
                Some(entries) => formatter.format_entry(&EntryRecord::new(token, entries))?,
                None => {
                    log::info!("No exception entry for '{token}'");
                    missing.push(token.clone());
                }
            }
        }
        formatter.finish()?;

        if !missing.is_empty() && !self.allow_missing {
            return Err(CliError::MissingTokens(missing).into());
        }
        Ok(())
    }
}
