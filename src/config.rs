//! Configuration file parsing for `strmangle.toml`.
//!
//! ```toml
//! [case]
//! acronyms = ["sku"]
//!
//! [sql]
//! dialect = "mysql"
//!
//! [tags]
//! names = ["db", "json"]
//! casing = "snake"
//! ignore = ["users.password"]
//!
//! [tags.cases]
//! json = "camel"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use strmangle_case::{AcronymDictionary, CaseCache, CaseConverter};
use strmangle_sql::Dialect;

use crate::error::{MangleError, MangleResult};
use crate::tags::{TagCasing, TagSet};

/// Main configuration structure for `strmangle.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MangleConfig {
    /// Naming engine settings.
    #[serde(default)]
    pub case: CaseConfig,

    /// SQL generation settings.
    #[serde(default)]
    pub sql: SqlConfig,

    /// Struct tag settings.
    #[serde(default)]
    pub tags: TagConfig,
}

impl MangleConfig {
    /// Load configuration from a file path.
    pub fn from_file(path: impl AsRef<Path>) -> MangleResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| MangleError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Acronyms and tag names are validated here so that a bad entry is
    /// reported at load time rather than mid-generation.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> MangleResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| MangleError::Toml { source: e })?;

        config.acronyms()?;
        config.tag_set()?;

        tracing::debug!(
            dialect = %config.sql.dialect,
            acronyms = config.case.acronyms.len(),
            tags = config.tags.names.len(),
            "Loaded strmangle configuration"
        );
        Ok(config)
    }

    /// The acronym dictionary described by `[case]`.
    pub fn acronyms(&self) -> MangleResult<AcronymDictionary> {
        let dict = if self.case.replace_acronyms {
            AcronymDictionary::new(&self.case.acronyms)?
        } else {
            AcronymDictionary::builtin().extended(&self.case.acronyms)?
        };
        Ok(dict)
    }

    /// A converter with a fresh cache.
    pub fn converter(&self) -> MangleResult<CaseConverter> {
        Ok(CaseConverter::new(self.acronyms()?))
    }

    /// A converter sharing `cache`.
    pub fn converter_with_cache(&self, cache: Arc<CaseCache>) -> MangleResult<CaseConverter> {
        Ok(CaseConverter::with_cache(self.acronyms()?, cache))
    }

    /// The target dialect.
    pub fn dialect(&self) -> Dialect {
        self.sql.dialect
    }

    /// The tags to emit.
    pub fn tag_set(&self) -> MangleResult<TagSet> {
        TagSet::from_names_with(&self.tags.names, self.tags.casing, &self.tags.cases)
    }

    /// Columns to leave out of generated code, bare or as `table.column`.
    pub fn ignore_set(&self) -> HashSet<String> {
        self.tags.ignore.iter().cloned().collect()
    }
}

/// Naming engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CaseConfig {
    /// Extra acronyms.
    #[serde(default)]
    pub acronyms: Vec<String>,

    /// Use only `acronyms`, dropping the built-in dictionary.
    #[serde(default)]
    pub replace_acronyms: bool,
}

/// SQL generation configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SqlConfig {
    /// Target dialect.
    #[serde(default)]
    pub dialect: Dialect,
}

/// Struct tag configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TagConfig {
    /// Tag names, in output order.
    #[serde(default)]
    pub names: Vec<String>,

    /// Default casing for tag values.
    #[serde(default)]
    pub casing: TagCasing,

    /// Per-tag casing overrides.
    #[serde(default)]
    pub cases: HashMap<String, TagCasing>,

    /// Ignored columns.
    #[serde(default)]
    pub ignore: Vec<String>,
}
