use crate::file::error::FileError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DELIMITER: char = ';';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvSettings {
    pub delimiter: char,
    pub quote: char,
}

impl CsvSettings {
    pub fn new(delimiter: char) -> Self {
        CsvSettings {
            delimiter,
            ..Default::default()
        }
    }

    pub fn delimiter_byte(&self) -> Result<u8, FileError> {
        ascii_byte(self.delimiter, "delimiter")
    }

    pub fn quote_byte(&self) -> Result<u8, FileError> {
        ascii_byte(self.quote, "quote")
    }
}

impl Default for CsvSettings {
    fn default() -> Self {
        CsvSettings {
            delimiter: DEFAULT_DELIMITER,
            quote: '"',
        }
    }
}

fn ascii_byte(ch: char, what: &str) -> Result<u8, FileError> {
    if ch.is_ascii() && !matches!(ch, '\n' | '\r') {
        Ok(ch as u8)
    } else {
        Err(FileError::InvalidFormat(format!(
            "CSV {what} must be a single ASCII character, got {ch:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiter_is_semicolon() {
        let settings = CsvSettings::default();
        assert_eq!(settings.delimiter_byte().unwrap(), b';');
        assert_eq!(settings.quote_byte().unwrap(), b'"');
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        assert!(CsvSettings::new('§').delimiter_byte().is_err());
        assert!(CsvSettings::new('\n').delimiter_byte().is_err());
        assert_eq!(CsvSettings::new('\t').delimiter_byte().unwrap(), b'\t');
    }
}
