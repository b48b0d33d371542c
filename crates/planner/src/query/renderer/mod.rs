//! Defines the core rendering trait and context for converting AST to SQL.

use crate::query::{ast::insert::Literal, dialect::Dialect, statement::SqlStatement};
use model::core::value::{LiteralStyle, is_numeric};

pub mod insert;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// Values are inlined as literals; there are no bind parameters because the
/// output is a standalone script.
pub struct Renderer<'a> {
    pub sql: String,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the finished statement.
    pub fn finish(self) -> SqlStatement {
        SqlStatement::new(self.sql)
    }

    pub fn render_identifier(&mut self, ident: &str) {
        let quoted = self.dialect.quote_identifier(ident);
        self.sql.push_str(&quoted);
    }

    pub fn render_literal(&mut self, literal: &Literal) {
        match literal.style {
            LiteralStyle::Quoted => self.push_quoted(&literal.raw, false),
            LiteralStyle::Escaped => self.push_quoted(&literal.raw, true),
            LiteralStyle::Typed if literal.raw.is_empty() => self.sql.push_str("NULL"),
            LiteralStyle::Typed if is_numeric(&literal.raw) => self.sql.push_str(&literal.raw),
            LiteralStyle::Typed => self.push_quoted(&literal.raw, true),
        }
    }

    fn push_quoted(&mut self, raw: &str, escape: bool) {
        let quote = self.dialect.string_quote();
        self.sql.push(quote);
        if escape {
            let backslash = self.dialect.escapes_backslash();
            for ch in raw.chars() {
                if ch == quote || (backslash && ch == '\\') {
                    self.sql.push(ch);
                }
                self.sql.push(ch);
            }
        } else {
            self.sql.push_str(raw);
        }
        self.sql.push(quote);
    }
}
