//! Enum type declarations as reported by database drivers.
//!
//! PostgreSQL drivers report `enum.type_name('a','b')` and MySQL drivers
//! report `enum('a','b')`. Declarations that don't have that shape yield
//! no name and no values.

use regex_lite::Regex;
use std::sync::LazyLock;

static ENUM_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^enum(\.\w+)?\([^)]+\)$").expect("valid enum regex"));

static ENUM_NORMAL_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_\s]*$").expect("valid enum value regex"));

static ENUM_TITLE_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9_]+$").expect("valid enum title regex"));

/// A parsed enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSpec {
    /// The type name, when the driver reports one.
    pub name: Option<String>,
    /// The values in declaration order.
    pub values: Vec<String>,
}

/// Parse a full enum declaration.
///
/// ```rust
/// use strmangle_sql::parse_enum;
///
/// let spec = parse_enum("enum.mood('sad','ok','happy')").unwrap();
/// assert_eq!(spec.name.as_deref(), Some("mood"));
/// assert_eq!(spec.values, ["sad", "ok", "happy"]);
///
/// assert!(parse_enum("varchar(255)").is_none());
/// ```
pub fn parse_enum(decl: &str) -> Option<EnumSpec> {
    if !ENUM_DECL.is_match(decl) {
        tracing::trace!(decl, "Not an enum declaration");
        return None;
    }

    let name = enum_name(decl);
    Some(EnumSpec {
        name: (!name.is_empty()).then(|| name.to_string()),
        values: enum_values(decl),
    })
}

/// The type name of an enum declaration, or `""` when there is none.
pub fn parse_enum_name(decl: &str) -> String {
    if !ENUM_DECL.is_match(decl) {
        return String::new();
    }
    enum_name(decl).to_string()
}

/// The quoted values of an enum declaration, in order.
pub fn parse_enum_vals(decl: &str) -> Vec<String> {
    if !ENUM_DECL.is_match(decl) {
        return Vec::new();
    }
    enum_values(decl)
}

/// Whether every value can become an identifier without mangling.
pub fn is_enum_normal<S: AsRef<str>>(values: &[S]) -> bool {
    values.iter().all(|v| ENUM_NORMAL_VALUE.is_match(v.as_ref()))
}

/// Whether a value is lowercase-led snake/camel text worth title casing.
pub fn should_title_case_enum(value: &str) -> bool {
    ENUM_TITLE_VALUE.is_match(value)
}

fn enum_name(decl: &str) -> &str {
    let head = decl.split_once('(').map_or(decl, |(head, _)| head);
    head.strip_prefix("enum")
        .unwrap_or(head)
        .trim_start_matches('.')
}

fn enum_values(decl: &str) -> Vec<String> {
    let Some((_, body)) = decl.split_once('(') else {
        return Vec::new();
    };
    let body = body.strip_suffix(')').unwrap_or(body);
    let body = body.strip_prefix('\'').unwrap_or(body);
    let body = body.strip_suffix('\'').unwrap_or(body);

    body.split("','").map(str::to_string).collect()
}
