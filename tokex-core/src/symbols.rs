//! Annotation field identifiers shared with the host tokenizer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Field of a token annotation record
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Attr {
    /// Exact surface spelling of the token
    Orth,
    /// Canonical dictionary form
    Lemma,
    /// Normalized spelling used for matching
    Norm,
}

impl Attr {
    /// All fields in record order
    pub const ALL: [Attr; 3] = [Attr::Orth, Attr::Lemma, Attr::Norm];

    /// Symbol name as used by the host annotation schema
    pub fn as_str(&self) -> &'static str {
        match self {
            Attr::Orth => "ORTH",
            Attr::Lemma => "LEMMA",
            Attr::Norm => "NORM",
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
