//! snake_case to TitleCase / camelCase conversion.
//!
//! Input is split into words on every non-alphanumeric character (`_`,
//! `/`, `-`, ...); separators are dropped and runs of them collapse.
//!
//! There are two families of conversion:
//!
//! - [`CaseConverter::title_case`] / [`CaseConverter::camel_case`] are
//!   acronym-aware and cached. A word whose letters before its first digit
//!   are a dictionary acronym, or which has no lowercase vowel at all, is
//!   upper-cased entirely (`user_guid` → `UserGUID`, `vzx_id` → `VZXID`).
//!   Any other word only has its first character upper-cased.
//! - [`title_case_full`] / [`camel_case_full`] drop the leading run of
//!   digits and separators, then upper-case the first character of every
//!   word. They never consult the dictionary or the cache.
//!
//! ```rust
//! use strmangle_case::CaseConverter;
//!
//! let conv = CaseConverter::default();
//! assert_eq!(conv.title_case("thing_guid"), "ThingGUID");
//! assert_eq!(conv.title_case("thing_guids"), "ThingGuids");
//! assert_eq!(conv.camel_case("fun_id_times"), "funIDTimes");
//! assert_eq!(conv.title_case_identifier("hey.id.world"), "Hey.ID.World");
//! ```

use std::sync::Arc;

use crate::acronym::AcronymDictionary;
use crate::cache::{CaseCache, CaseStyle};

/// Acronym-aware case converter.
///
/// Cloning is cheap and clones share the same cache.
#[derive(Debug, Clone, Default)]
pub struct CaseConverter {
    acronyms: Arc<AcronymDictionary>,
    cache: Arc<CaseCache>,
}

impl CaseConverter {
    /// Create a converter with the given dictionary and a fresh cache.
    pub fn new(acronyms: AcronymDictionary) -> Self {
        Self::with_cache(acronyms, Arc::new(CaseCache::new()))
    }

    /// Create a converter that shares an existing cache.
    ///
    /// The cache must only ever be shared between converters using the
    /// same dictionary, otherwise cached values would disagree.
    pub fn with_cache(acronyms: AcronymDictionary, cache: Arc<CaseCache>) -> Self {
        Self {
            acronyms: Arc::new(acronyms),
            cache,
        }
    }

    /// The dictionary in use.
    pub fn acronyms(&self) -> &AcronymDictionary {
        &self.acronyms
    }

    /// The cache in use.
    pub fn cache(&self) -> &Arc<CaseCache> {
        &self.cache
    }

    /// Convert to `TitleCase`, rendering acronyms in uppercase.
    pub fn title_case(&self, raw: &str) -> String {
        self.cache
            .get_or_insert_with(CaseStyle::Title, raw, || self.compute_title(raw))
    }

    /// Convert to `camelCase`.
    ///
    /// A leading acronym is lower-cased entirely (`UUID_thing` →
    /// `uuidThing`); any other first word only has its first character
    /// lower-cased. The remaining words follow
    /// [`title_case`](Self::title_case).
    pub fn camel_case(&self, raw: &str) -> String {
        self.cache
            .get_or_insert_with(CaseStyle::Camel, raw, || self.compute_camel(raw))
    }

    /// Title case every `.`-separated segment independently.
    pub fn title_case_identifier(&self, raw: &str) -> String {
        raw.split('.')
            .map(|segment| self.title_case(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    fn compute_title(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        for word in words(raw) {
            self.push_title_word(&mut out, word);
        }
        out
    }

    fn compute_camel(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut iter = words(raw);
        if let Some(first) = iter.next() {
            if self.is_acronym(first) {
                out.extend(first.chars().flat_map(char::to_lowercase));
            } else {
                push_with_first(&mut out, first, char::to_lowercase);
            }
        }
        for word in iter {
            self.push_title_word(&mut out, word);
        }
        out
    }

    /// The word, or its letters before the first digit, is a known acronym.
    fn is_acronym(&self, word: &str) -> bool {
        let letters_end = word
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(word.len());
        self.acronyms.contains(&word[..letters_end]) || self.acronyms.contains(word)
    }

    fn push_title_word(&self, out: &mut String, word: &str) {
        let shout = self.is_acronym(word) || !has_lowercase_vowel(word);

        if shout {
            out.extend(word.chars().flat_map(char::to_uppercase));
        } else {
            push_with_first(out, word, char::to_uppercase);
        }
    }
}

/// Convert to `TitleCase` without acronym handling.
///
/// Leading digits and separators are dropped (`418im_a_teapot` →
/// `ImATeapot`); everything after a word's first character is left as
/// typed.
pub fn title_case_full(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in words(trim_leading_noise(raw)) {
        push_with_first(&mut out, word, char::to_uppercase);
    }
    out
}

/// Convert to `camelCase` without acronym handling.
///
/// Same rules as [`title_case_full`], except the first word starts in
/// lowercase.
pub fn camel_case_full(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut iter = words(trim_leading_noise(raw));
    if let Some(first) = iter.next() {
        push_with_first(&mut out, first, char::to_lowercase);
    }
    for word in iter {
        push_with_first(&mut out, word, char::to_uppercase);
    }
    out
}

fn words(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

fn trim_leading_noise(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| c.is_ascii_digit() || !c.is_alphanumeric())
}

fn has_lowercase_vowel(word: &str) -> bool {
    word.bytes()
        .any(|b| matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y'))
}

fn push_with_first<F, I>(out: &mut String, word: &str, map: F)
where
    F: Fn(char) -> I,
    I: Iterator<Item = char>,
{
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(map(first));
        out.push_str(chars.as_str());
    }
}
