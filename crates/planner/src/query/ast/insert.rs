//! Defines the AST for a single-row INSERT statement.

use model::core::{identifiers::TableName, value::LiteralStyle};
use std::sync::Arc;

/// Represents one `INSERT INTO ... VALUES (...)` statement.
///
/// `columns` is shared with the source rows of the same file, so building
/// one statement per row does not copy the header.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: TableName,
    pub columns: Arc<[String]>,
    pub values: Vec<Literal>,
}

/// A raw value and the style it is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub raw: String,
    pub style: LiteralStyle,
}

impl Literal {
    pub fn new(raw: impl Into<String>, style: LiteralStyle) -> Self {
        Self {
            raw: raw.into(),
            style,
        }
    }

    pub fn quoted(raw: impl Into<String>) -> Self {
        Self::new(raw, LiteralStyle::Quoted)
    }
}
