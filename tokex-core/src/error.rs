//! Error types for exception table construction and loading

use thiserror::Error;

/// Errors raised while loading or validating exception tables
///
/// Building a table from the built-in seed data never fails; these errors
/// only arise from external configuration and I/O.
#[derive(Error, Debug)]
pub enum TokexError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No built-in table for the requested language
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The language code that was requested
        code: String,
    },
}

/// Result type for exception table operations
pub type Result<T> = std::result::Result<T, TokexError>;
