//! Exception table and its builder
//!
//! The table maps exact surface spellings to single-record entries. Keys are
//! case-sensitive and insertion is last-write-wins; overwrites across
//! descriptors are recorded as [`Collision`]s so data-authoring mistakes stay
//! visible without changing the resulting table.

use std::collections::HashMap;

use smallvec::smallvec;

use crate::casing::case_variants;
use crate::types::{ExceptionEntry, TokenAttrs};

/// A key written by one descriptor and later overwritten by another
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Collision {
    /// The contested spelling
    pub key: String,
    /// Record that was replaced
    pub previous: TokenAttrs,
    /// Record that now occupies the key
    pub replacement: TokenAttrs,
}

impl Collision {
    /// True when the two records carry different annotations
    pub fn is_conflicting(&self) -> bool {
        self.previous != self.replacement
    }
}

/// Immutable lookup table of tokenizer exceptions
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionTable {
    code: String,
    entries: HashMap<String, ExceptionEntry>,
    collisions: Vec<Collision>,
}

impl ExceptionTable {
    /// Start building a table for the given language code
    pub fn builder(code: impl Into<String>) -> ExceptionTableBuilder {
        ExceptionTableBuilder::new(code)
    }

    /// Language code the table was built for
    pub fn language_code(&self) -> &str {
        &self.code
    }

    /// Entry for an exact spelling
    #[inline]
    pub fn get(&self, key: &str) -> Option<&[TokenAttrs]> {
        self.entries.get(key).map(|entry| entry.as_slice())
    }

    /// Whether the spelling has an entry
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[TokenAttrs])> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry.as_slice()))
    }

    /// All keys in lexicographic order
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Overwrites recorded while building, in insertion order
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }
}

/// Incremental builder for [`ExceptionTable`]
#[derive(Debug)]
pub struct ExceptionTableBuilder {
    code: String,
    /// key -> (id of the descriptor that wrote it, entry)
    entries: HashMap<String, (usize, ExceptionEntry)>,
    collisions: Vec<Collision>,
    next_source: usize,
}

impl ExceptionTableBuilder {
    /// Create an empty builder
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            entries: HashMap::new(),
            collisions: Vec::new(),
            next_source: 0,
        }
    }

    /// Add an abbreviation with its case variants and dotted forms
    ///
    /// For each of the spelling as given, capitalized and uppercased, both the
    /// bare variant and the variant followed by `.` are inserted. The record
    /// stored under each key carries that key as its spelling.
    pub fn add_abbreviation(&mut self, orth: &str, lemma: &str, norm: &str) -> &mut Self {
        let source = self.next_source();
        for variant in case_variants(orth) {
            let dotted = format!("{variant}.");
            self.insert(source, TokenAttrs::new(variant, lemma, norm));
            self.insert(source, TokenAttrs::new(dotted, lemma, norm));
        }
        self
    }

    /// Add an exception keyed by its spelling exactly as written
    pub fn add_exception(&mut self, orth: &str, lemma: &str, norm: &str) -> &mut Self {
        let source = self.next_source();
        self.insert(source, TokenAttrs::new(orth, lemma, norm));
        self
    }

    /// Finish and freeze the table
    pub fn build(self) -> ExceptionTable {
        tracing::debug!(
            code = %self.code,
            keys = self.entries.len(),
            collisions = self.collisions.len(),
            "built exception table"
        );

        ExceptionTable {
            code: self.code,
            entries: self
                .entries
                .into_iter()
                .map(|(key, (_, entry))| (key, entry))
                .collect(),
            collisions: self.collisions,
        }
    }

    fn next_source(&mut self) -> usize {
        let id = self.next_source;
        self.next_source += 1;
        id
    }

    fn insert(&mut self, source: usize, attrs: TokenAttrs) {
        let replacement = attrs.clone();
        let overwritten = self
            .entries
            .insert(attrs.orth.clone(), (source, smallvec![attrs]));

        let Some((prev_source, prev_entry)) = overwritten else {
            return;
        };
        // Case variants of one descriptor may coincide; that is not a collision.
        if prev_source == source {
            return;
        }
        let Some(previous) = prev_entry.into_iter().next() else {
            return;
        };

        let collision = Collision {
            key: replacement.orth.clone(),
            previous,
            replacement,
        };
        if collision.is_conflicting() {
            tracing::info!(
                key = %collision.key,
                previous_lemma = %collision.previous.lemma,
                lemma = %collision.replacement.lemma,
                "exception key overwritten with a different annotation"
            );
        } else {
            tracing::debug!(key = %collision.key, "duplicate exception entry");
        }
        self.collisions.push(collision);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_expansion() {
        let mut builder = ExceptionTable::builder("sr");
        builder.add_abbreviation("пон", "понедељак", "понедељак");
        let table = builder.build();

        assert_eq!(table.len(), 6);
        for key in ["пон", "Пон", "ПОН", "пон.", "Пон.", "ПОН."] {
            let entry = table.get(key).unwrap();
            assert_eq!(entry.len(), 1);
            assert_eq!(entry[0].orth, key);
            assert_eq!(entry[0].lemma, "понедељак");
        }
        assert!(table.collisions().is_empty());
    }

    #[test]
    fn test_exception_verbatim() {
        let mut builder = ExceptionTable::builder("sr");
        builder.add_exception("н.е.", "нова ера", "нове ере");
        let table = builder.build();

        assert_eq!(table.len(), 1);
        assert_eq!(
            table.get("н.е."),
            Some(&[TokenAttrs::new("н.е.", "нова ера", "нове ере")][..])
        );
        assert!(!table.contains("Н.Е."));
    }

    #[test]
    fn test_last_write_wins_with_collision() {
        let mut builder = ExceptionTable::builder("sr");
        builder
            .add_exception("уч.", "ученик", "ученик")
            .add_exception("уч.", "милиграм", "милиграм");
        let table = builder.build();

        assert_eq!(table.get("уч.").unwrap()[0].lemma, "милиграм");
        let collisions = table.collisions();
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].key, "уч.");
        assert_eq!(collisions[0].previous.lemma, "ученик");
        assert!(collisions[0].is_conflicting());
    }

    #[test]
    fn test_identical_duplicate_is_not_conflicting() {
        let mut builder = ExceptionTable::builder("sr");
        builder
            .add_exception("гимн.", "гимназија", "гимназија")
            .add_exception("гимн.", "гимназија", "гимназија");
        let table = builder.build();

        assert_eq!(table.len(), 1);
        assert_eq!(table.collisions().len(), 1);
        assert!(!table.collisions()[0].is_conflicting());
    }

    #[test]
    fn test_coinciding_variants_are_not_collisions() {
        let mut builder = ExceptionTable::builder("sr");
        builder.add_abbreviation("Бгд", "Београд", "Београд");
        let table = builder.build();

        // "Бгд" and its capitalization coincide
        assert_eq!(table.len(), 4);
        assert!(table.collisions().is_empty());
    }

    #[test]
    fn test_sorted_keys() {
        let mut builder = ExceptionTable::builder("sr");
        builder
            .add_exception("мн.", "множина", "множина")
            .add_exception("бр.", "број", "број");
        let table = builder.build();

        assert_eq!(table.sorted_keys(), vec!["бр.", "мн."]);
        assert_eq!(table.language_code(), "sr");
    }

    #[test]
    fn test_empty_table() {
        let table = ExceptionTable::builder("xx").build();
        assert!(table.is_empty());
        assert_eq!(table.get("anything"), None);
    }
}
