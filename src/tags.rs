//! Struct tag rendering.
//!
//! A [`TagSet`] is built once from configuration: every tag name is
//! validated up front and paired with the casing rule used to render the
//! column name inside it.
//!
//! ```rust
//! use strmangle::tags::{TagCasing, TagKind, TagSet};
//! use strmangle::CaseConverter;
//!
//! let tags = TagSet::builder()
//!     .tag(TagKind::Db, TagCasing::Snake)
//!     .tag(TagKind::Json, TagCasing::Camel)
//!     .build();
//!
//! let conv = CaseConverter::default();
//! assert_eq!(tags.render(&conv, "user_id"), r#"db:"user_id" json:"userID" "#);
//! assert_eq!(tags.render_ignored(), r#"db:"-" json:"-" "#);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::collections::HashMap;
use std::fmt::{self, Write};

use strmangle_case::CaseConverter;

use crate::error::{MangleError, MangleResult};

/// A struct tag key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `json`
    Json,
    /// `yaml`
    Yaml,
    /// `toml`
    Toml,
    /// `xml`
    Xml,
    /// `db`
    Db,
    /// `boil`
    Boil,
    /// `mapstructure`
    Mapstructure,
    /// Any other key, validated on construction.
    Custom(SmolStr),
}

impl TagKind {
    /// Parse a tag key, rejecting names that would break the tag syntax.
    pub fn parse(name: &str) -> MangleResult<Self> {
        Ok(match name {
            "json" => Self::Json,
            "yaml" => Self::Yaml,
            "toml" => Self::Toml,
            "xml" => Self::Xml,
            "db" => Self::Db,
            "boil" => Self::Boil,
            "mapstructure" => Self::Mapstructure,
            other => {
                if other.is_empty() {
                    return Err(MangleError::invalid_tag(other, "tag names cannot be empty"));
                }
                if let Some(bad) = other
                    .chars()
                    .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
                {
                    return Err(MangleError::invalid_tag(
                        other,
                        format!("unexpected character {bad:?}"),
                    ));
                }
                Self::Custom(SmolStr::new(other))
            }
        })
    }

    /// The key as written in the tag.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Xml => "xml",
            Self::Db => "db",
            Self::Boil => "boil",
            Self::Mapstructure => "mapstructure",
            Self::Custom(name) => name.as_str(),
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the column name is rendered inside a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCasing {
    /// The column name as given.
    #[default]
    Snake,
    /// `camelCase`, acronym-aware.
    Camel,
    /// `TitleCase`, acronym-aware.
    Title,
    /// A caller-supplied alias, falling back to the column name.
    Alias,
}

impl TagCasing {
    fn apply(&self, converter: &CaseConverter, column: &str, alias: Option<&str>) -> String {
        match self {
            Self::Snake => column.to_string(),
            Self::Camel => converter.camel_case(column),
            Self::Title => converter.title_case(column),
            Self::Alias => alias.unwrap_or(column).to_string(),
        }
    }
}

/// An ordered set of tags with their casing rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: IndexMap<TagKind, TagCasing>,
}

impl TagSet {
    /// Create a new builder.
    pub fn builder() -> TagSetBuilder {
        TagSetBuilder::default()
    }

    /// Build from tag names, all rendered with `casing`.
    pub fn from_names<S: AsRef<str>>(names: &[S], casing: TagCasing) -> MangleResult<Self> {
        Self::from_names_with(names, casing, &HashMap::new())
    }

    /// Build from tag names, with per-tag casing overrides.
    ///
    /// A name listed twice is rejected, since a struct tag cannot carry
    /// the same key twice.
    pub fn from_names_with<S: AsRef<str>>(
        names: &[S],
        default: TagCasing,
        overrides: &HashMap<String, TagCasing>,
    ) -> MangleResult<Self> {
        let mut tags = IndexMap::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let casing = overrides.get(name).copied().unwrap_or(default);
            if tags.insert(TagKind::parse(name)?, casing).is_some() {
                return Err(MangleError::invalid_tag(name, "tag name listed more than once"));
            }
        }
        Ok(Self { tags })
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if there are no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The casing rule for a tag, if present.
    pub fn casing(&self, kind: &TagKind) -> Option<TagCasing> {
        self.tags.get(kind).copied()
    }

    /// Render `key:"value" ` for every tag.
    pub fn render(&self, converter: &CaseConverter, column: &str) -> String {
        self.render_with_alias(converter, column, None)
    }

    /// Render every tag, using `alias` for tags with [`TagCasing::Alias`].
    pub fn render_with_alias(
        &self,
        converter: &CaseConverter,
        column: &str,
        alias: Option<&str>,
    ) -> String {
        let mut out = String::new();
        for (kind, casing) in &self.tags {
            let value = casing.apply(converter, column, alias);
            let _ = write!(out, r#"{kind}:"{value}" "#);
        }
        out
    }

    /// Render `key:"-" ` for every tag.
    pub fn render_ignored(&self) -> String {
        let mut out = String::new();
        for kind in self.tags.keys() {
            let _ = write!(out, r#"{kind}:"-" "#);
        }
        out
    }
}

/// Builder for [`TagSet`].
#[derive(Debug, Default)]
pub struct TagSetBuilder {
    tags: IndexMap<TagKind, TagCasing>,
}

impl TagSetBuilder {
    /// Add a tag. Adding the same kind twice keeps its first position and
    /// the latest casing.
    pub fn tag(mut self, kind: TagKind, casing: TagCasing) -> Self {
        self.tags.insert(kind, casing);
        self
    }

    /// Build the tag set.
    pub fn build(self) -> TagSet {
        TagSet { tags: self.tags }
    }
}

/// Render `name:"column" ` for every tag name.
///
/// Names are validated as for [`TagSet::from_names`], so a repeated name
/// is an error.
pub fn generate_tags<S: AsRef<str>>(names: &[S], column: &str) -> MangleResult<String> {
    let tags = TagSet::from_names(names, TagCasing::Snake)?;
    let mut out = String::new();
    for kind in tags.tags.keys() {
        let _ = write!(out, r#"{kind}:"{column}" "#);
    }
    Ok(out)
}

/// Render `name:"-" ` for every tag name.
pub fn generate_ignore_tags<S: AsRef<str>>(names: &[S]) -> MangleResult<String> {
    Ok(TagSet::from_names(names, TagCasing::Snake)?.render_ignored())
}

/// Render a map as `` `key`: `value` `` pairs in key order.
pub fn make_string_map<K, V>(map: &HashMap<K, V>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(&str, &str)> = map
        .iter()
        .map(|(k, v)| (k.as_ref(), v.as_ref()))
        .collect();
    pairs.sort_unstable();

    pairs
        .iter()
        .map(|(k, v)| format!("`{k}`: `{v}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
