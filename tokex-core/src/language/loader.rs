//! Built-in table loader
//!
//! Tables are built on first request and shared afterwards.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{Result, TokexError};
use crate::language::{serbian, tables::ExceptionTable};

/// Built-in tables keyed by every accepted alias
static EMBEDDED: OnceLock<HashMap<&'static str, Arc<ExceptionTable>>> = OnceLock::new();

/// Codes and names of the built-in tables
pub fn available_languages() -> &'static [(&'static str, &'static str)] {
    &[(serbian::CODE, serbian::NAME)]
}

/// Load a built-in table by language code
///
/// Accepts `sr`, `sr-Cyrl` and `serbian`.
pub fn get_table(code: &str) -> Result<Arc<ExceptionTable>> {
    let embedded = EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        let serbian = Arc::new(serbian::build());
        map.insert(serbian::CODE, serbian.clone());
        map.insert("sr-Cyrl", serbian.clone());
        map.insert("serbian", serbian);

        map
    });

    embedded
        .get(code)
        .cloned()
        .ok_or_else(|| TokexError::UnsupportedLanguage {
            code: code.to_string(),
        })
}
