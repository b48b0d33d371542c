use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("Document has no root element")]
    MissingRoot,

    #[error("<string> element without a name attribute at byte {0}")]
    MissingName(u64),

    #[error("Failed to write sorted document: {0}")]
    Write(String),

    #[error("Sorted document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
