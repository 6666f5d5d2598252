//! Language-specific tokenizer exception tables
//!
//! Built-in tables are constructed from literal seed data; further tables
//! can be described in TOML and loaded at runtime.

pub mod config;
pub mod interface;
pub mod loader;
pub mod runtime;
pub mod serbian;
pub mod tables;

pub use config::{DescriptorConfig, ExceptionsConfig, Metadata};
pub use interface::TokenizerExceptions;
pub use loader::{available_languages, get_table};
pub use tables::{Collision, ExceptionTable, ExceptionTableBuilder};
