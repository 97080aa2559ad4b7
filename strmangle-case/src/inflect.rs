//! Pluralization of snake_case names.
//!
//! The word rules themselves are supplied by the caller through
//! [`Inflector`]; this module only decides which part of a name gets
//! inflected. Only the last `_`-separated segment changes, so
//! `hello_person` pluralizes to `hello_people` rather than `hellos_people`.
//!
//! ```rust
//! use strmangle_case::{Inflector, plural, singular};
//!
//! struct Naive;
//!
//! impl Inflector for Naive {
//!     fn pluralize(&self, word: &str) -> String {
//!         if word.ends_with('s') { word.to_string() } else { format!("{word}s") }
//!     }
//!
//!     fn singularize(&self, word: &str) -> String {
//!         word.strip_suffix('s').unwrap_or(word).to_string()
//!     }
//! }
//!
//! assert_eq!(plural(&Naive, "user_friend"), "user_friends");
//! assert_eq!(singular(&Naive, "user_friends"), "user_friend");
//! ```

/// Word-level pluralization rules.
pub trait Inflector {
    /// Pluralize a single word.
    fn pluralize(&self, word: &str) -> String;

    /// Singularize a single word.
    fn singularize(&self, word: &str) -> String;
}

impl<T: Inflector + ?Sized> Inflector for &T {
    fn pluralize(&self, word: &str) -> String {
        (**self).pluralize(word)
    }

    fn singularize(&self, word: &str) -> String {
        (**self).singularize(word)
    }
}

/// Pluralize the last segment of a snake_case name.
pub fn plural<I: Inflector + ?Sized>(inflector: &I, name: &str) -> String {
    inflect_last(name, |word| inflector.pluralize(word))
}

/// Singularize the last segment of a snake_case name.
pub fn singular<I: Inflector + ?Sized>(inflector: &I, name: &str) -> String {
    inflect_last(name, |word| inflector.singularize(word))
}

fn inflect_last(name: &str, f: impl FnOnce(&str) -> String) -> String {
    match name.rsplit_once('_') {
        Some((head, last)) => format!("{head}_{}", f(last)),
        None => f(name),
    }
}
