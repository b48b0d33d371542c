use crate::error::CliError;
use engine_config::report::summary::{BatchReport, FileReport, FileStatus};
use std::path::Path;

/// Prints `Processed <csv> -> <sql>` to stdout once a file has converted.
pub fn print_processed(file: &FileReport) {
    if let FileStatus::Converted(_) = file.status {
        println!(
            "Processed {} -> {}",
            file.source.display(),
            file.destination.display()
        );
    }
}

/// Failures and skipped files, on stderr.
pub fn print_failures(report: &BatchReport) {
    for file in &report.files {
        match &file.status {
            FileStatus::Failed { error } => {
                eprintln!("Failed {}: {error}", file.source.display());
            }
            FileStatus::NotAttempted => {
                eprintln!("Not attempted {}", file.source.display());
            }
            FileStatus::Converted(_) => {}
        }
    }
    if report.is_partial() {
        eprintln!(
            "Batch incomplete: {} of {} file(s) converted",
            report.converted().count(),
            report.files.len()
        );
    }
}

pub fn write_report(report: &BatchReport, path: &Path) -> Result<(), CliError> {
    let json = report.to_json()?;
    std::fs::write(path, json).map_err(|source| CliError::ReportWrite {
        path: path.display().to_string(),
        source,
    })
}
