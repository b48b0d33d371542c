use connectors::file::error::FileError;
use thiserror::Error;

/// Top‐level errors for CSV to SQL conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input directory is missing or cannot be listed.
    #[error("Failed to read directory {path}: {source}")]
    Directory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading the CSV source or writing the SQL script failed.
    #[error("File error: {0}")]
    File(#[from] FileError),

    /// The table name derived for a file is empty (e.g. `export-.csv`).
    #[error("Empty table name for {0}")]
    InvalidTableName(String),
}
