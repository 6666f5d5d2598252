//! Language source management for CLI

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tokex_core::{get_table, ExceptionTable};

/// Source of an exception table
#[derive(Debug, Clone)]
pub enum LanguageSource {
    /// Built-in table
    BuiltIn(Language),
    /// External configuration file
    External {
        /// Path to the configuration file
        path: PathBuf,
    },
}

/// Supported built-in languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    /// Serbian (Cyrillic) exceptions
    Serbian,
}

impl Language {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Serbian => "Serbian",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Serbian => "sr",
        }
    }
}

/// Shared arguments selecting which table to use
#[derive(Debug, Clone, Args)]
pub struct LanguageArgs {
    /// Built-in exception table
    #[arg(short, long, value_enum, default_value = "serbian")]
    pub language: Language,

    /// External TOML exception table (overrides --language)
    #[arg(short = 'c', long, value_name = "FILE", env = "TOKEX_LANGUAGE_CONFIG")]
    pub language_config: Option<PathBuf>,
}

impl LanguageArgs {
    /// Resolve the arguments to a source
    pub fn source(&self) -> LanguageSource {
        match &self.language_config {
            Some(path) => LanguageSource::External { path: path.clone() },
            None => LanguageSource::BuiltIn(self.language),
        }
    }
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(lang) => format!("Built-in: {}", lang.as_str()),
            LanguageSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Build or fetch the exception table
    pub fn load(&self) -> Result<Arc<ExceptionTable>> {
        log::info!("Loading exception table ({})", self.display_name());
        match self {
            LanguageSource::BuiltIn(lang) => Ok(get_table(lang.code())?),
            LanguageSource::External { path } => {
                let table = ExceptionTable::from_file(path).with_context(|| {
                    format!("Failed to load language config: {}", path.display())
                })?;
                Ok(Arc::new(table))
            }
        }
    }
}
