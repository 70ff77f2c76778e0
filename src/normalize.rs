//! Lookup-key normalization for dictionary words and extracted words.
//!
//! The two sides are folded differently. Dictionary keys are only
//! lower-cased and trimmed, while words coming out of the text layer are
//! additionally run through Unicode compatibility decomposition (NFKD).
//! A dictionary key written with precomposed characters therefore does not
//! match the same word in a document.

use unicode_normalization::UnicodeNormalization;

/// Normalize a dictionary key: lower-case, strip surrounding whitespace.
pub fn normalize_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Normalize a word extracted from a page before dictionary lookup.
pub fn normalize_word(text: &str) -> String {
    normalize_key(text).nfkd().collect()
}
