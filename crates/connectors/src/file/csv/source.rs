use crate::file::{csv::settings::CsvSettings, error::FileError};
use model::records::row::Row;
use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::debug;

/// Streams the data rows of one delimiter-separated file.
///
/// The header is read eagerly on open; rows are read one at a time and each
/// is checked against the header's field count.
pub struct CsvSource {
    path: PathBuf,
    headers: Arc<[String]>,
    records: csv::StringRecordsIntoIter<File>,
}

impl CsvSource {
    pub fn open(path: &Path, settings: &CsvSettings) -> Result<Self, FileError> {
        let file = File::open(path).map_err(|err| FileError::from_io(path, err))?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(settings.delimiter_byte()?)
            .quote(settings.quote_byte()?)
            .has_headers(true)
            // Field counts are checked per row so malformed rows carry a line number.
            .flexible(true)
            .from_reader(file);

        let headers: Arc<[String]> = reader.headers()?.iter().map(String::from).collect();
        if headers.is_empty() {
            return Err(FileError::MissingHeader(path.display().to_string()));
        }
        debug!("Opened {} with columns {:?}", path.display(), headers);

        Ok(CsvSource {
            path: path.to_path_buf(),
            headers,
            records: reader.into_records(),
        })
    }

    pub fn headers(&self) -> &Arc<[String]> {
        &self.headers
    }
}

impl Iterator for CsvSource {
    type Item = Result<Row, FileError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let found = record.len();
        let values = record.iter().map(String::from).collect();

        Some(
            Row::new(self.headers.clone(), values).ok_or_else(|| FileError::MalformedRow {
                path: self.path.display().to_string(),
                line,
                expected: self.headers.len(),
                found,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_header_and_rows() {
        let file = csv_file("id;name\n1;Alice\n2;Bob\n");
        let source = CsvSource::open(file.path(), &CsvSettings::default()).unwrap();

        assert_eq!(&**source.headers(), &["id".to_string(), "name".to_string()]);
        let rows: Vec<Row> = source.map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("name"), Some("Bob"));
    }

    #[test]
    fn test_quoted_fields_may_contain_delimiter() {
        let file = csv_file("id;note\n1;\"a;b\"\n");
        let mut source = CsvSource::open(file.path(), &CsvSettings::default()).unwrap();

        let row = source.next().unwrap().unwrap();
        assert_eq!(row.values(), &["1".to_string(), "a;b".to_string()]);
    }

    #[test]
    fn test_short_row_is_malformed_with_line_number() {
        let file = csv_file("id;name\n1;Alice\n2\n3;Carol\n");
        let source = CsvSource::open(file.path(), &CsvSettings::default()).unwrap();

        let results: Vec<_> = source.collect();
        assert!(results[0].is_ok());
        match &results[1] {
            Err(FileError::MalformedRow {
                line,
                expected,
                found,
                ..
            }) => {
                assert_eq!(*line, 3);
                assert_eq!(*expected, 2);
                assert_eq!(*found, 1);
            }
            other => panic!("expected malformed row, got {other:?}"),
        }
        // Reading continues past the malformed row.
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_empty_file_has_no_header() {
        let file = csv_file("");
        let err = CsvSource::open(file.path(), &CsvSettings::default())
            .err()
            .unwrap();
        assert!(matches!(err, FileError::MissingHeader(_)));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = CsvSource::open(&dir.path().join("nope.csv"), &CsvSettings::default())
            .err()
            .unwrap();
        assert!(matches!(err, FileError::NotFound(_)));
    }

    #[test]
    fn test_custom_delimiter() {
        let file = csv_file("id,name\n1,Alice\n");
        let source = CsvSource::open(file.path(), &CsvSettings::new(',')).unwrap();
        assert_eq!(source.headers().len(), 2);
    }
}
