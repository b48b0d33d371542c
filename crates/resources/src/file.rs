use crate::{
    error::ResourceError,
    sorter::{is_sorted, sort_document},
};
use std::{fs, path::Path};
use tracing::{debug, info};

/// Location of the string table in a standard Android module.
pub const DEFAULT_STRINGS_PATH: &str = "app/src/main/res/values/strings.xml";

/// Sorts the resource file at `path` and overwrites it in place.
///
/// The whole document is sorted in memory first, so a parse error leaves
/// the file untouched.
pub fn sort_file(path: &Path) -> Result<(), ResourceError> {
    let source = read(path)?;
    let sorted = sort_document(&source)?;
    fs::write(path, sorted).map_err(|source| io_error(path, source))?;
    info!("Sorted {}", path.display());
    Ok(())
}

/// Returns whether the resource file at `path` is already sorted.
pub fn check_file(path: &Path) -> Result<bool, ResourceError> {
    let sorted = is_sorted(&read(path)?)?;
    debug!("{} sorted: {}", path.display(), sorted);
    Ok(sorted)
}

fn read(path: &Path) -> Result<String, ResourceError> {
    fs::read_to_string(path).map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: std::io::Error) -> ResourceError {
    ResourceError::Io {
        path: path.display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.xml");
        fs::write(
            &path,
            r#"<resources><string name="b">B</string><string name="a">A</string></resources>"#,
        )
        .unwrap();

        assert!(!check_file(&path).unwrap());
        sort_file(&path).unwrap();
        assert!(check_file(&path).unwrap());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
        assert!(content.ends_with(
            r#"<resources><string name="a">A</string><string name="b">B</string></resources>"#
        ));
    }

    #[test]
    fn test_invalid_document_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.xml");
        let broken = "<resources><string name=\"a\">A</resources>";
        fs::write(&path, broken).unwrap();

        assert!(sort_file(&path).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), broken);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = sort_file(&dir.path().join("strings.xml")).unwrap_err();
        assert!(matches!(err, ResourceError::Io { .. }));
    }
}
