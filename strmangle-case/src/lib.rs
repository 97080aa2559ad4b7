//! # strmangle-case
//!
//! Naming engine for schema-driven code generators.
//!
//! This crate provides:
//! - Acronym-aware `TitleCase` / `camelCase` conversion of snake_case names
//! - An injectable [`AcronymDictionary`] and a shareable [`CaseCache`]
//! - Plain ("full") conversions that ignore acronyms
//! - Short ordinal names for generated variables
//! - A seam for plugging in pluralization rules
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use strmangle_case::{AcronymDictionary, CaseCache, CaseConverter};
//!
//! // One cache per generator run, shared by every worker.
//! let cache = Arc::new(CaseCache::new());
//! let conv = CaseConverter::with_cache(AcronymDictionary::builtin(), Arc::clone(&cache));
//!
//! assert_eq!(conv.title_case("account_uuid"), "AccountUUID");
//! assert_eq!(conv.camel_case("account_uuid"), "accountUUID");
//! assert_eq!(cache.len(), 2);
//! ```

pub mod acronym;
pub mod cache;
pub mod convert;
pub mod error;
pub mod ident;
pub mod inflect;

pub use acronym::{AcronymDictionary, DEFAULT_ACRONYMS};
pub use cache::{CacheStats, CaseCache, CaseStyle};
pub use convert::{CaseConverter, camel_case_full, title_case_full};
pub use error::{CaseError, CaseResult};
pub use ident::{identifier, trim_left_digits};
pub use inflect::{Inflector, plural, singular};
