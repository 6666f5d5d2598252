//! Configuration structures and validation
//!
//! This module defines the TOML schema for exception tables.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::language::serbian;
use crate::types::Descriptor;

static LANGUAGE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2,3}(-[A-Za-z0-9]+)?$").unwrap());

/// Root exception table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceptionsConfig {
    pub metadata: Metadata,
    /// Expanded into case variants and dotted forms
    #[serde(default)]
    pub abbreviations: Vec<DescriptorConfig>,
    /// Inserted exactly as written
    #[serde(default)]
    pub exceptions: Vec<DescriptorConfig>,
}

/// Language metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// One abbreviation in a configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorConfig {
    pub orth: String,
    pub lemma: String,
    /// Defaults to the lemma when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub norm: Option<String>,
}

impl DescriptorConfig {
    /// Normalized form, falling back to the lemma
    pub fn norm(&self) -> &str {
        self.norm.as_deref().unwrap_or(&self.lemma)
    }
}

impl From<&Descriptor> for DescriptorConfig {
    fn from(d: &Descriptor) -> Self {
        Self {
            orth: d.orth.to_string(),
            lemma: d.lemma.to_string(),
            norm: (d.norm != d.lemma).then(|| d.norm.to_string()),
        }
    }
}

impl ExceptionsConfig {
    /// Configuration equivalent to the built-in Serbian table
    pub fn serbian() -> Self {
        Self {
            metadata: Metadata {
                code: serbian::CODE.to_string(),
                name: serbian::NAME.to_string(),
            },
            abbreviations: serbian::ABBREVIATIONS.iter().map(Into::into).collect(),
            exceptions: serbian::EXCEPTIONS.iter().map(Into::into).collect(),
        }
    }

    /// Parse from TOML text without validating
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Number of descriptors across both lists
    pub fn descriptor_count(&self) -> usize {
        self.abbreviations.len() + self.exceptions.len()
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("Language code must not be empty".to_string());
        }

        if !LANGUAGE_CODE.is_match(&self.metadata.code) {
            return Err(format!(
                "Invalid language code '{}' (expected e.g. \"sr\" or \"sr-Latn\")",
                self.metadata.code
            ));
        }

        if self.descriptor_count() == 0 {
            return Err("No abbreviations or exceptions defined".to_string());
        }

        let lists = [
            ("abbreviations", &self.abbreviations),
            ("exceptions", &self.exceptions),
        ];
        for (section, descriptors) in lists {
            for (i, d) in descriptors.iter().enumerate() {
                if d.orth.is_empty() {
                    return Err(format!("{section}[{i}]: orth must not be empty"));
                }
                if d.orth.chars().any(char::is_whitespace) {
                    return Err(format!(
                        "{section}[{i}]: orth '{}' must not contain whitespace",
                        d.orth
                    ));
                }
            }
        }

        Ok(())
    }
}
