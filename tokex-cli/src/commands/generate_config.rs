//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokex_core::{ExceptionTable, ExceptionsConfig};

use crate::error::CliError;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating exception table template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the abbreviations and exceptions for your language");
        println!("2. Validate your configuration:");
        println!(
            "   tokex validate --language-config {}",
            self.output.display()
        );
        println!("3. Use it for lookups:");
        println!(
            "   tokex lookup --language-config {} <TOKEN>",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    ///
    /// The body is the built-in Serbian data, so the template is a complete,
    /// valid example to edit from. Fails if the language code would make the
    /// template invalid.
    fn generate_template(&self) -> Result<String> {
        let mut config = ExceptionsConfig::serbian();
        if self.language_code != config.metadata.code {
            config.metadata.code = self.language_code.clone();
            config.metadata.name = "Custom Language".to_string();
        }
        ExceptionTable::from_config(&config).map_err(|e| CliError::ConfigError(e.to_string()))?;

        let body = config.to_toml_string()?;
        Ok(format!(
            r#"# Tokenizer exception table for {}
#
# [[abbreviations]] entries are expanded: the spelling as given, capitalized
# and uppercased, each with and without a trailing period.
# [[exceptions]] entries are inserted exactly as written.
# `norm` is optional and defaults to `lemma`.
# When a spelling appears twice, the later entry wins.

{}"#,
            self.language_code, body
        ))
    }
}
