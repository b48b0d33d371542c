use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, sync::Arc};

/// Name of the table the generated statements target.
///
/// Derivation is purely lexical: the file stem is split on `-` and the last
/// segment is used verbatim. No SQL identifier rules are checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableName(Arc<str>);

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::from(name.into()))
    }

    /// Derives the table name from a file name such as `orders-2024-customers.csv`.
    pub fn derive(file_name: &str) -> Self {
        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        let last = stem.rsplit('-').next().unwrap_or(stem);
        Self::new(last)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TableName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TableName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
