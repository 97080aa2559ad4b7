//! The acronym dictionary consulted by acronym-aware case conversion.
//!
//! Entries are stored lowercase and matched case-insensitively against a
//! whole token (or the token's letters before its first digit). A match is
//! rendered fully uppercase.
//!
//! ```rust
//! use strmangle_case::AcronymDictionary;
//!
//! let dict = AcronymDictionary::builtin();
//! assert!(dict.contains("GUID"));
//! assert!(!dict.contains("guids"));
//!
//! let custom = AcronymDictionary::new(["sku", "vat"]).unwrap();
//! assert!(custom.contains("sku"));
//! assert!(!custom.contains("id"));
//! ```

use smol_str::SmolStr;
use std::collections::HashSet;

use crate::error::{CaseError, CaseResult};

/// Acronyms known out of the box.
pub const DEFAULT_ACRONYMS: &[&str] = &[
    "acl", "api", "ascii", "cpu", "eof", "guid", "id", "ip", "json", "ram", "sla", "ssn", "tz",
    "udp", "ui", "uid", "uuid", "uri", "url", "utf8",
];

/// An immutable set of acronyms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcronymDictionary {
    words: HashSet<SmolStr>,
}

impl AcronymDictionary {
    /// Build a dictionary from the given entries.
    ///
    /// Entries must be non-empty runs of ASCII letters and digits.
    pub fn new<I, S>(words: I) -> CaseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            set.insert(normalize(word.as_ref())?);
        }

        tracing::debug!(count = set.len(), "Built acronym dictionary");
        Ok(Self { words: set })
    }

    /// The built-in dictionary.
    pub fn builtin() -> Self {
        Self {
            words: DEFAULT_ACRONYMS.iter().copied().map(SmolStr::new_static).collect(),
        }
    }

    /// A dictionary with no entries.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Return a new dictionary holding these entries plus `extra`.
    pub fn extended<I, S>(&self, extra: I) -> CaseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = self.words.clone();
        for word in extra {
            words.insert(normalize(word.as_ref())?);
        }
        Ok(Self { words })
    }

    /// Check whether `token` is an acronym, ignoring case.
    pub fn contains(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        if token.bytes().all(|b| !b.is_ascii_uppercase()) {
            return self.words.contains(token);
        }
        self.words.contains(token.to_ascii_lowercase().as_str())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The entries in their canonical uppercase form, sorted.
    pub fn canonical(&self) -> Vec<String> {
        let mut out: Vec<String> = self.words.iter().map(|w| w.to_ascii_uppercase()).collect();
        out.sort_unstable();
        out
    }
}

impl Default for AcronymDictionary {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize(word: &str) -> CaseResult<SmolStr> {
    if word.is_empty() {
        return Err(CaseError::invalid_acronym(word, "acronyms cannot be empty"));
    }
    if !word.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(CaseError::invalid_acronym(
            word,
            "acronyms may only contain ASCII letters and digits",
        ));
    }
    if word.as_bytes()[0].is_ascii_digit() {
        return Err(CaseError::invalid_acronym(
            word,
            "acronyms must start with a letter",
        ));
    }
    Ok(SmolStr::new(word.to_ascii_lowercase()))
}
