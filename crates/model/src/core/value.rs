use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use thiserror::Error;

/// How a raw CSV value is written into the VALUES tuple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralStyle {
    /// Wrapped in quotes verbatim. Embedded quotes are not escaped.
    #[default]
    Quoted,
    /// Wrapped in quotes with embedded quote characters doubled.
    Escaped,
    /// `NULL` for empty values, bare numbers, escaped strings otherwise.
    Typed,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown literal style '{0}' (expected quoted, escaped or typed)")]
pub struct UnknownLiteralStyle(pub String);

impl FromStr for LiteralStyle {
    type Err = UnknownLiteralStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quoted" => Ok(LiteralStyle::Quoted),
            "escaped" => Ok(LiteralStyle::Escaped),
            "typed" => Ok(LiteralStyle::Typed),
            _ => Err(UnknownLiteralStyle(s.to_string())),
        }
    }
}

impl fmt::Display for LiteralStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LiteralStyle::Quoted => "quoted",
            LiteralStyle::Escaped => "escaped",
            LiteralStyle::Typed => "typed",
        };
        f.write_str(name)
    }
}

/// Per-column rendering policy with a default for unlisted columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuePolicy {
    pub default: LiteralStyle,
    pub columns: BTreeMap<String, LiteralStyle>,
}

impl ValuePolicy {
    pub fn new(default: LiteralStyle) -> Self {
        Self {
            default,
            columns: BTreeMap::new(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>, style: LiteralStyle) -> Self {
        self.columns.insert(column.into(), style);
        self
    }

    /// Style for `column`; overrides match the header name exactly.
    pub fn style_for(&self, column: &str) -> LiteralStyle {
        self.columns.get(column).copied().unwrap_or(self.default)
    }
}

/// Returns true when `raw` reads as an integer or a finite decimal number.
pub fn is_numeric(raw: &str) -> bool {
    if raw.is_empty() || raw.trim() != raw {
        return false;
    }
    if raw.parse::<i128>().is_ok() {
        return true;
    }
    // Rejects "inf", "NaN" and friends which f64 parsing accepts.
    raw.bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
        && raw.parse::<f64>().is_ok_and(f64::is_finite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_str() {
        assert_eq!("quoted".parse::<LiteralStyle>(), Ok(LiteralStyle::Quoted));
        assert_eq!("Typed".parse::<LiteralStyle>(), Ok(LiteralStyle::Typed));
        assert!("numeric".parse::<LiteralStyle>().is_err());
    }

    #[test]
    fn test_policy_column_override() {
        let policy = ValuePolicy::default().with_column("id", LiteralStyle::Typed);
        assert_eq!(policy.style_for("id"), LiteralStyle::Typed);
        assert_eq!(policy.style_for("ID"), LiteralStyle::Quoted);
        assert_eq!(policy.style_for("name"), LiteralStyle::Quoted);
    }

    #[test]
    fn test_is_numeric() {
        for raw in ["1", "-42", "3.14", "1e3", "+7", "0.5"] {
            assert!(is_numeric(raw), "{raw} should be numeric");
        }
        for raw in ["", " 1", "abc", "NaN", "inf", "1,5", "12a"] {
            assert!(!is_numeric(raw), "{raw} should not be numeric");
        }
    }
}
