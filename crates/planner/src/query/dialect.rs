//! Defines the `Dialect` trait for target-specific quoting rules.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (table or column name) for the dialect.
    ///
    /// - Plain leaves it verbatim: `my_column`
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Character that opens and closes a string literal.
    fn string_quote(&self) -> char;

    /// Whether `\` starts an escape sequence inside string literals and
    /// must itself be doubled.
    fn escapes_backslash(&self) -> bool {
        false
    }

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;
}

/// Identifiers verbatim, values in double quotes.
#[derive(Debug, Clone)]
pub struct Plain;

impl Dialect for Plain {
    fn quote_identifier(&self, ident: &str) -> String {
        ident.to_string()
    }

    fn string_quote(&self) -> char {
        '"'
    }

    fn name(&self) -> String {
        "Plain".into()
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn string_quote(&self) -> char {
        '\''
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn string_quote(&self) -> char {
        '\''
    }

    fn escapes_backslash(&self) -> bool {
        true
    }

    fn name(&self) -> String {
        "MySQL".into()
    }
}

/// Configurable selector for the dialects above.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    Plain,
    MySql,
    Postgres,
}

impl DialectKind {
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            DialectKind::Plain => &Plain,
            DialectKind::MySql => &MySql,
            DialectKind::Postgres => &Postgres,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown SQL dialect '{0}' (expected plain, mysql or postgres)")]
pub struct UnknownDialect(pub String);

impl FromStr for DialectKind {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(DialectKind::Plain),
            "mysql" => Ok(DialectKind::MySql),
            "postgres" | "pg" | "postgresql" => Ok(DialectKind::Postgres),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DialectKind::Plain => "plain",
            DialectKind::MySql => "mysql",
            DialectKind::Postgres => "postgres",
        };
        f.write_str(name)
    }
}
