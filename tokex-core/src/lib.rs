//! Tokenizer exception tables
//!
//! An exception table maps exact surface strings (abbreviations, titles,
//! units) to the annotation records a tokenizer should emit for them instead
//! of applying its general segmentation rules.
//!
//! Tables are plain immutable values: build one with a factory and pass it
//! by reference (or `Arc`) to the tokenizer.
//!
//! # Example
//!
//! ```rust
//! use tokex_core::language::serbian;
//! use tokex_core::TokenizerExceptions;
//!
//! let table = serbian::build();
//!
//! let entry = table.special_case("Пет.").unwrap();
//! assert_eq!(entry[0].orth, "Пет.");
//! assert_eq!(entry[0].lemma, "петак");
//!
//! assert!(table.is_exception("др"));
//! assert!(!table.is_exception("доктор"));
//! ```

pub mod casing;
pub mod error;
pub mod language;
pub mod symbols;
pub mod types;

pub use error::{Result, TokexError};
pub use language::{
    available_languages, get_table, Collision, ExceptionTable, ExceptionTableBuilder,
    ExceptionsConfig, TokenizerExceptions,
};
pub use symbols::Attr;
pub use types::{Descriptor, ExceptionEntry, TokenAttrs};
