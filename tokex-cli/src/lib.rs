//! tokex CLI library
//!
//! This library provides the command-line interface for inspecting,
//! validating and generating tokenizer exception tables.

pub mod commands;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;

pub use error::{CliError, CliResult};
