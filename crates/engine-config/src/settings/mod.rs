use crate::settings::{
    error::SettingsError,
    policy::{ErrorPolicy, RowPolicy},
};
use connectors::file::csv::settings::CsvSettings;
use model::core::value::{LiteralStyle, ValuePolicy};
use planner::query::dialect::DialectKind;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::debug;

pub mod error;
pub mod policy;

/// Everything a conversion run can be tuned with.
///
/// Defaults reproduce the plain behavior: `;` delimiter, every value in
/// double quotes, identifiers verbatim, abort on the first failing file,
/// fail on malformed rows and platform directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertSettings {
    pub csv: CsvSettings,
    pub dialect: DialectKind,
    pub values: ValuePolicy,
    pub on_error: ErrorPolicy,
    pub on_malformed_row: RowPolicy,
    pub sort_files: bool,
}

impl ConvertSettings {
    /// Loads settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let source = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let settings = Self::from_toml_str(&source)?;
        debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
        let settings: ConvertSettings = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.csv.delimiter_byte()?;
        self.csv.quote_byte()?;
        Ok(())
    }
}

/// Parses a `column=style` override as given on the command line.
pub fn parse_column_override(raw: &str) -> Result<(String, LiteralStyle), SettingsError> {
    let (column, style) = raw
        .split_once('=')
        .ok_or_else(|| SettingsError::ColumnOverride(raw.to_string()))?;
    if column.is_empty() {
        return Err(SettingsError::ColumnOverride(raw.to_string()));
    }
    let style = style
        .parse::<LiteralStyle>()
        .map_err(|_| SettingsError::ColumnOverride(raw.to_string()))?;
    Ok((column.to_string(), style))
}
