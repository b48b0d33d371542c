use connectors::file::error::FileError;
use thiserror::Error;

/// Errors raised when loading or validating converter settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for `ConvertSettings`.
    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A CSV option is unusable (e.g. a multi-byte delimiter).
    #[error("Invalid CSV settings: {0}")]
    Csv(#[from] FileError),

    /// A `column=style` override could not be parsed.
    #[error("Invalid column override '{0}' (expected <column>=<quoted|escaped|typed>)")]
    ColumnOverride(String),
}
