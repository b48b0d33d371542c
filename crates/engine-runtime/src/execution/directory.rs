use crate::{error::ConvertError, execution::convert::convert_file};
use engine_config::{
    report::summary::{BatchReport, FileReport, FileStatus},
    settings::{ConvertSettings, policy::ErrorPolicy},
};
use model::records::csv_file::CsvFile;
use std::{fs, path::Path};
use tracing::{debug, error, info};

/// Lists the `*.csv` files directly inside `directory`.
///
/// Order is whatever the platform returns unless `sort` is set, in which
/// case files are ordered by name.
pub fn discover(directory: &Path, sort: bool) -> Result<Vec<CsvFile>, ConvertError> {
    let dir_error = |source| ConvertError::Directory {
        path: directory.display().to_string(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(directory).map_err(dir_error)? {
        let path = entry.map_err(dir_error)?.path();
        let Some(file) = CsvFile::from_path(&path) else {
            continue;
        };
        if !path.is_file() {
            debug!("Ignoring {}: not a regular file", path.display());
            continue;
        }
        files.push(file);
    }

    if sort {
        files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    }
    Ok(files)
}

/// Converts every CSV file in `directory` into a sibling `.sql` script.
///
/// Per-file failures never unwind the batch: they are recorded in the
/// returned report, and `settings.on_error` decides whether the remaining
/// files are still attempted. Only a directory that cannot be listed is
/// returned as an error.
pub fn process_directory(
    directory: &Path,
    settings: &ConvertSettings,
) -> Result<BatchReport, ConvertError> {
    process_directory_with(directory, settings, |_| {})
}

/// Same as [`process_directory`], calling `on_file` as soon as each file's
/// outcome is known.
pub fn process_directory_with(
    directory: &Path,
    settings: &ConvertSettings,
    mut on_file: impl FnMut(&FileReport),
) -> Result<BatchReport, ConvertError> {
    let files = discover(directory, settings.sort_files)?;
    info!(
        "Found {} CSV file(s) in {} (on_error={}, on_malformed_row={})",
        files.len(),
        directory.display(),
        settings.on_error,
        settings.on_malformed_row
    );

    let mut report = BatchReport::new(directory.to_path_buf(), settings.on_error);
    let mut aborted = false;

    for file in &files {
        if aborted {
            on_file(report.record(file, FileStatus::NotAttempted));
            continue;
        }

        let status = match convert_file(&file.path, &file.sql_path, &file.table, settings) {
            Ok(stats) => {
                info!(
                    "Processed {} -> {}",
                    file.path.display(),
                    file.sql_path.display()
                );
                FileStatus::Converted(stats)
            }
            Err(err) => {
                error!("Failed to convert {}: {err}", file.path.display());
                if settings.on_error == ErrorPolicy::Abort {
                    aborted = true;
                }
                FileStatus::Failed {
                    error: err.to_string(),
                }
            }
        };
        on_file(report.record(file, status));
    }

    report.finish();
    Ok(report)
}
