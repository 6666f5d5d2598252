//! Runtime construction of exception tables
//!
//! This module bridges configuration files and the lookup table.

use std::path::Path;

use crate::error::{Result, TokexError};
use crate::language::{
    config::ExceptionsConfig, interface::TokenizerExceptions, tables::ExceptionTable,
};
use crate::types::TokenAttrs;

impl ExceptionTable {
    /// Create from configuration
    pub fn from_config(config: &ExceptionsConfig) -> Result<Self> {
        config.validate().map_err(TokexError::InvalidConfig)?;

        let mut builder = ExceptionTable::builder(config.metadata.code.as_str());
        for d in &config.abbreviations {
            builder.add_abbreviation(&d.orth, &d.lemma, d.norm());
        }
        for d in &config.exceptions {
            builder.add_exception(&d.orth, &d.lemma, d.norm());
        }
        Ok(builder.build())
    }

    /// Parse, validate and build from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config = ExceptionsConfig::from_toml_str(s)?;
        Self::from_config(&config)
    }

    /// Load from a TOML configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading exception table");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

impl TokenizerExceptions for ExceptionTable {
    #[inline]
    fn special_case(&self, text: &str) -> Option<&[TokenAttrs]> {
        self.get(text)
    }
}
