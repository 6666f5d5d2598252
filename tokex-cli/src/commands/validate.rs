//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tokex_core::{ExceptionTable, ExceptionsConfig};

use crate::error::CliError;
use crate::input::FileReader;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to exception table configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating exception configuration: {}",
            self.language_config.display()
        );

        let content = FileReader::read_text(&self.language_config)?;
        let built = ExceptionsConfig::from_toml_str(&content)
            .and_then(|config| ExceptionTable::from_config(&config).map(|t| (config, t)));

        match built {
            Ok((config, table)) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", config.metadata.code);
                println!("  Language name: {}", config.metadata.name);
                println!("  Descriptors: {}", config.descriptor_count());
                println!("  Table keys: {}", table.len());

                let conflicting = table
                    .collisions()
                    .iter()
                    .filter(|c| c.is_conflicting())
                    .count();
                if !table.collisions().is_empty() {
                    println!(
                        "  Collisions: {} ({} conflicting)",
                        table.collisions().len(),
                        conflicting
                    );
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(CliError::ConfigError(e.to_string()).into())
            }
        }
    }
}
