//! # strmangle-sql
//!
//! SQL text generation for schema-driven code generators.
//!
//! This crate provides:
//! - Quoting of dotted identifiers that leaves expressions alone
//! - Indexed (`$n`) and anonymous (`?`) placeholder lists, with tuple grouping
//! - `SET`, `WHERE` and `WHERE ... IN` fragments
//! - Parsing of driver-reported enum declarations
//! - Keyword collision avoidance for generated identifiers
//!
//! ## Example
//!
//! ```rust
//! use strmangle_sql::{Dialect, placeholders, where_clause};
//!
//! let dialect = Dialect::PostgreSql;
//! let (lq, rq) = dialect.quotes();
//!
//! let table = dialect.quote("public.users");
//! let filter = where_clause(&lq.to_string(), &rq.to_string(), 1, &["id", "tenant_id"]);
//! let insert = placeholders(dialect.uses_indexed_placeholders(), 4, 1, 2).unwrap();
//!
//! assert_eq!(table, r#""public"."users""#);
//! assert_eq!(filter, r#""id"=$1 AND "tenant_id"=$2"#);
//! assert_eq!(insert, "($1,$2),($3,$4)");
//! ```

pub mod clause;
pub mod dialect;
pub mod enums;
pub mod error;
pub mod placeholder;
pub mod quote;
pub mod reserved;

pub use clause::{set_param_names, where_clause, where_clause_repeated, where_in_clause};
pub use dialect::Dialect;
pub use enums::{
    EnumSpec, is_enum_normal, parse_enum, parse_enum_name, parse_enum_vals,
    should_title_case_enum,
};
pub use error::{SqlError, SqlResult};
pub use placeholder::{PlaceholderSpec, placeholders};
pub use quote::{quote, quote_character, quote_slice, schema_table};
pub use reserved::{RESERVED_WORDS, is_reserved_word, replace_reserved_words};
