//! Public contract between exception tables and a host tokenizer
//!
//! A tokenizer consults its exceptions by exact string match before applying
//! general segmentation rules. Anything that can answer that lookup can be
//! plugged in.

use crate::types::TokenAttrs;

/// Exact-match exception lookup used by a tokenizer
pub trait TokenizerExceptions: Send + Sync + 'static {
    /// Records to emit for `text`, or `None` if general rules apply
    fn special_case(&self, text: &str) -> Option<&[TokenAttrs]>;

    /// Whether `text` must be kept as a single token
    #[inline]
    fn is_exception(&self, text: &str) -> bool {
        self.special_case(text).is_some()
    }
}
