#![allow(dead_code)]

use std::{fs, path::Path};
use tempfile::TempDir;

pub mod utils;

/// Creates a scratch directory populated with `(file name, contents)` pairs.
pub fn fixture_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("create fixture dir");
    for (name, contents) in files {
        write_file(dir.path(), name, contents);
    }
    dir
}

pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture file");
}
