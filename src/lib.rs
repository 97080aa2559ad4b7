//! # strmangle
//!
//! String mangling for code generators that turn database schema metadata
//! into source identifiers and SQL text.
//!
//! strmangle provides:
//! - Acronym-aware case conversion backed by a shared cache ([`case`])
//! - Identifier quoting, placeholder lists and clause fragments ([`sql`])
//! - Struct tag rendering from a validated tag configuration ([`tags`])
//! - Order-preserving slice and set helpers ([`slice`])
//! - `strmangle.toml` configuration and logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use strmangle::prelude::*;
//!
//! let config = MangleConfig::from_str(r#"
//!     [sql]
//!     dialect = "postgres"
//!
//!     [tags]
//!     names = ["db", "json"]
//!
//!     [tags.cases]
//!     json = "camel"
//! "#)?;
//!
//! let conv = config.converter()?;
//! let tags = config.tag_set()?;
//! let (lq, rq) = config.dialect().quotes();
//! let (lq, rq) = (lq.to_string(), rq.to_string());
//!
//! let columns = ["id", "owner_uuid"];
//! assert_eq!(conv.title_case("owner_uuid"), "OwnerUUID");
//! assert_eq!(tags.render(&conv, "owner_uuid"), r#"db:"owner_uuid" json:"ownerUUID" "#);
//! assert_eq!(set_param_names(&lq, &rq, 1, &columns), r#""id"=$1,"owner_uuid"=$2"#);
//! # Ok::<(), strmangle::MangleError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod logging;
pub mod slice;
pub mod tags;

/// Case conversion and naming.
pub mod case {
    pub use strmangle_case::*;
}

/// SQL text generation.
pub mod sql {
    pub use strmangle_sql::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::case::{
        AcronymDictionary, CaseCache, CaseConverter, camel_case_full, identifier,
        title_case_full, trim_left_digits,
    };
    pub use crate::config::MangleConfig;
    pub use crate::error::{MangleError, MangleResult};
    pub use crate::slice::{
        contains_any, ignore, join_slices, prefix_string_slice, remove_duplicates,
        string_map, string_slice_match,
    };
    pub use crate::sql::{
        Dialect, placeholders, quote, quote_character, quote_slice, replace_reserved_words,
        set_param_names, where_clause, where_in_clause,
    };
    pub use crate::tags::{TagCasing, TagKind, TagSet, generate_ignore_tags, generate_tags};
}

// Re-export key types at the crate root
pub use case::{AcronymDictionary, CaseCache, CaseConverter};
pub use config::MangleConfig;
pub use error::{MangleError, MangleResult};
pub use sql::{Dialect, SqlError};
