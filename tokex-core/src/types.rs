//! Core value types: seed descriptors and annotation records

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::symbols::Attr;

/// Canonical form of one abbreviation as written in seed data
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Descriptor {
    /// Spelling of the abbreviation
    pub orth: &'static str,
    /// Dictionary form of the abbreviated word
    pub lemma: &'static str,
    /// Normalized form
    pub norm: &'static str,
}

impl Descriptor {
    /// Create a descriptor
    pub const fn new(orth: &'static str, lemma: &'static str, norm: &'static str) -> Self {
        Self { orth, lemma, norm }
    }

    /// Record carrying this descriptor unchanged
    pub fn to_attrs(&self) -> TokenAttrs {
        TokenAttrs::new(self.orth, self.lemma, self.norm)
    }
}

/// One annotation record of an exception entry
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TokenAttrs {
    /// Surface spelling
    #[serde(rename = "ORTH")]
    pub orth: String,
    /// Lemma
    #[serde(rename = "LEMMA")]
    pub lemma: String,
    /// Normalized form
    #[serde(rename = "NORM")]
    pub norm: String,
}

impl TokenAttrs {
    /// Create a record
    pub fn new(orth: impl Into<String>, lemma: impl Into<String>, norm: impl Into<String>) -> Self {
        Self {
            orth: orth.into(),
            lemma: lemma.into(),
            norm: norm.into(),
        }
    }

    /// Value of a single field
    pub fn get(&self, attr: Attr) -> &str {
        match attr {
            Attr::Orth => &self.orth,
            Attr::Lemma => &self.lemma,
            Attr::Norm => &self.norm,
        }
    }
}

/// Value stored under one key of an exception table
///
/// Always holds exactly one record for the tables built here; the sequence
/// shape matches what the host tokenizer expects for multi-token splits.
pub type ExceptionEntry = SmallVec<[TokenAttrs; 1]>;
