//! Keyword collision avoidance for generated identifiers.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Strict and reserved Rust keywords.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

static RESERVED: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| RESERVED_WORDS.iter().copied().collect());

/// Check whether `word` is reserved, ignoring case.
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED.contains(word.to_ascii_lowercase().as_str())
}

/// Append `_` to `word` if it is reserved.
///
/// ```rust
/// use strmangle_sql::replace_reserved_words;
///
/// assert_eq!(replace_reserved_words("type"), "type_");
/// assert_eq!(replace_reserved_words("id"), "id");
/// ```
pub fn replace_reserved_words(word: &str) -> String {
    if is_reserved_word(word) {
        format!("{word}_")
    } else {
        word.to_string()
    }
}
