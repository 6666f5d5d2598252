//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod dump;
pub mod generate_config;
pub mod lookup;
pub mod scan;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up tokens in an exception table
    Lookup(lookup::LookupArgs),

    /// Print a whole exception table
    Dump(dump::DumpArgs),

    /// Report exception tokens found in text files
    Scan(scan::ScanArgs),

    /// Validate an exception table configuration file
    Validate(validate::ValidateArgs),

    /// Generate an exception table configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in exception tables
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Lookup(args) => args.execute(),
            Commands::Dump(args) => args.execute(),
            Commands::Scan(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Built-in exception tables:");
                for (code, name) in tokex_core::available_languages() {
                    println!("  {code:<4} {}", name.to_lowercase());
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                println!("  text  tab-separated, one entry per line");
                println!("  json  JSON array");
            }
        }
    }
}
