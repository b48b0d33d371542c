use engine_config::settings::error::SettingsError;
use engine_runtime::error::ConvertError;
use resources::ResourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("Conversion failed: {0}")]
    Convert(#[from] ConvertError),

    #[error("Failed to sort resource file: {0}")]
    Resource(#[from] ResourceError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Failed to write report to {path}: {source}")]
    ReportWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
