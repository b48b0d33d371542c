use crate::core::identifiers::TableName;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const CSV_SUFFIX: &str = ".csv";
pub const SQL_EXTENSION: &str = "sql";

/// A CSV source together with the SQL script it converts into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvFile {
    pub path: PathBuf,
    pub sql_path: PathBuf,
    pub table: TableName,
}

impl CsvFile {
    /// Builds a `CsvFile` when the file name ends in the literal `.csv` suffix.
    ///
    /// Matching is case-sensitive: `DATA.CSV` is not picked up.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        if !file_name.ends_with(CSV_SUFFIX) {
            return None;
        }

        Some(CsvFile {
            path: path.to_path_buf(),
            sql_path: path.with_extension(SQL_EXTENSION),
            table: TableName::derive(file_name),
        })
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}
