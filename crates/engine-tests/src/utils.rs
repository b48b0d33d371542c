use connectors::file::error::FileError;
use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::Path,
};

/// One parsed `INSERT INTO t (c1, c2) VALUES ("v1", "v2");` line in the
/// default rendering.
#[derive(Debug, PartialEq, Eq)]
pub struct ParsedInsert {
    pub table: String,
    pub columns: Vec<String>,
    pub values: Vec<String>,
}

pub fn file_row_count(path: &Path, has_headers: bool) -> Result<usize, FileError> {
    let f = File::open(path).map_err(FileError::IoError)?;
    let reader = BufReader::new(f);

    let total_lines = reader
        .lines()
        .map(|r| r.map_err(FileError::IoError))
        .try_fold(0, |acc, line| line.map(|_| acc + 1))?;

    let data_rows = if has_headers && total_lines > 0 {
        total_lines - 1
    } else {
        total_lines
    };
    Ok(data_rows)
}

pub fn sql_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read sql file")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Splits a statement rendered with the plain dialect and quoted values.
///
/// Values must not themselves contain `", "`.
pub fn parse_insert(line: &str) -> ParsedInsert {
    let rest = line.strip_prefix("INSERT INTO ").expect("INSERT prefix");
    let (table, rest) = rest.split_once(" (").expect("column list");
    let (columns, rest) = rest.split_once(") VALUES (").expect("VALUES keyword");
    let values = rest.strip_suffix(");").expect("statement terminator");

    let values = values
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .expect("quoted values");

    ParsedInsert {
        table: table.to_string(),
        columns: columns.split(", ").map(str::to_string).collect(),
        values: values.split("\", \"").map(str::to_string).collect(),
    }
}

/// Sorted names of the entries in `dir`.
pub fn entry_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
