//! Per-database quoting and placeholder conventions.

use serde::{Deserialize, Serialize};

/// The SQL dialect a generator targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// PostgreSQL: `"ident"`, `$1, $2, ...`
    #[default]
    #[serde(alias = "postgres")]
    PostgreSql,
    /// MySQL / MariaDB: `` `ident` ``, `?`
    MySql,
    /// SQLite: `"ident"`, `?`
    #[serde(alias = "sqlite3")]
    Sqlite,
    /// SQL Server: `[ident]`, `$1, $2, ...`
    #[serde(alias = "sqlserver")]
    MsSql,
}

impl Dialect {
    /// Get the dialect name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostgreSql => "postgresql",
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
            Self::MsSql => "mssql",
        }
    }

    /// Left and right identifier quote characters.
    pub fn quotes(&self) -> (char, char) {
        match self {
            Self::PostgreSql | Self::Sqlite => ('"', '"'),
            Self::MySql => ('`', '`'),
            Self::MsSql => ('[', ']'),
        }
    }

    /// Whether placeholders carry an index (`$1`) rather than being `?`.
    pub fn uses_indexed_placeholders(&self) -> bool {
        matches!(self, Self::PostgreSql | Self::MsSql)
    }

    /// The placeholder for the 1-based parameter `index`.
    pub fn placeholder(&self, index: usize) -> String {
        if self.uses_indexed_placeholders() {
            format!("${}", index)
        } else {
            "?".to_string()
        }
    }

    /// Quote an identifier with this dialect's quote characters.
    pub fn quote(&self, raw: &str) -> String {
        let (lq, rq) = self.quotes();
        crate::quote::quote(lq, rq, raw)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
