use crate::settings::policy::ErrorPolicy;
use chrono::{DateTime, Utc};
use model::{core::identifiers::TableName, records::csv_file::CsvFile};
use serde::Serialize;
use std::path::PathBuf;

/// Row counts for one converted file.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    pub rows_written: usize,
    pub rows_skipped: usize,
}

/// Outcome of one file within a directory run.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Converted(FileStats),
    Failed { error: String },
    /// The run aborted before reaching this file.
    NotAttempted,
}

#[derive(Serialize, Debug, Clone)]
pub struct FileReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub table: TableName,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileReport {
    pub fn new(file: &CsvFile, status: FileStatus) -> Self {
        FileReport {
            source: file.path.clone(),
            destination: file.sql_path.clone(),
            table: file.table.clone(),
            status,
        }
    }
}

/// Per-file outcomes of one directory run.
///
/// A run is partial when some files converted and others failed or were
/// never attempted; files converted before a failure keep their output.
#[derive(Serialize, Debug, Clone)]
pub struct BatchReport {
    pub directory: PathBuf,
    pub error_policy: ErrorPolicy,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn new(directory: PathBuf, error_policy: ErrorPolicy) -> Self {
        BatchReport {
            directory,
            error_policy,
            started_at: Utc::now(),
            finished_at: None,
            files: Vec::new(),
        }
    }

    /// Appends the outcome for `file` and returns the stored entry.
    pub fn record(&mut self, file: &CsvFile, status: FileStatus) -> &FileReport {
        let idx = self.files.len();
        self.files.push(FileReport::new(file, status));
        &self.files[idx]
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn converted(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Converted(_)))
    }

    pub fn failed(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Failed { .. }))
    }

    pub fn not_attempted(&self) -> impl Iterator<Item = &FileReport> {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::NotAttempted)
    }

    /// True when every discovered file converted (vacuously true for none).
    pub fn is_success(&self) -> bool {
        self.converted().count() == self.files.len()
    }

    pub fn is_partial(&self) -> bool {
        !self.is_success() && self.converted().next().is_some()
    }

    pub fn rows_written(&self) -> usize {
        self.files
            .iter()
            .map(|f| match f.status {
                FileStatus::Converted(stats) => stats.rows_written,
                _ => 0,
            })
            .sum()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn csv(name: &str) -> CsvFile {
        CsvFile::from_path(&Path::new("/data").join(name)).unwrap()
    }

    #[test]
    fn test_partial_batch() {
        let mut report = BatchReport::new("/data".into(), ErrorPolicy::Abort);
        report.record(
            &csv("a-x.csv"),
            FileStatus::Converted(FileStats {
                rows_written: 2,
                rows_skipped: 0,
            }),
        );
        report.record(
            &csv("b-y.csv"),
            FileStatus::Failed {
                error: "boom".into(),
            },
        );
        report.record(&csv("c-z.csv"), FileStatus::NotAttempted);
        report.finish();

        assert!(!report.is_success());
        assert!(report.is_partial());
        assert_eq!(report.failed().count(), 1);
        assert_eq!(report.not_attempted().count(), 1);
        assert_eq!(report.rows_written(), 2);
        assert!(report.finished_at.is_some());
    }

    #[test]
    fn test_empty_batch_is_success() {
        let report = BatchReport::new("/data".into(), ErrorPolicy::Continue);
        assert!(report.is_success());
        assert!(!report.is_partial());
    }

    #[test]
    fn test_report_json_shape() {
        let mut report = BatchReport::new("/data".into(), ErrorPolicy::Abort);
        report.record(
            &csv("a-x.csv"),
            FileStatus::Converted(FileStats {
                rows_written: 1,
                rows_skipped: 3,
            }),
        );

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        let file = &json["files"][0];
        assert_eq!(json["error_policy"], "abort");
        assert_eq!(file["status"], "converted");
        assert_eq!(file["table"], "x");
        assert_eq!(file["rows_written"], 1);
        assert_eq!(file["rows_skipped"], 3);
        assert_eq!(file["destination"], "/data/a-x.sql");
    }
}
