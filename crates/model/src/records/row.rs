use std::sync::Arc;

/// One data row of a CSV file, keyed by the header's column names.
///
/// The column list is shared by every row of the same file so the order
/// fixed by the header is the order of every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl Row {
    /// Returns `None` when the value count does not match the header.
    pub fn new(columns: Arc<[String]>, values: Vec<String>) -> Option<Self> {
        if columns.len() != values.len() {
            return None;
        }
        Some(Row { columns, values })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The shared header this row was read against.
    pub fn header(&self) -> &Arc<[String]> {
        &self.columns
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.values[idx].as_str())
    }

    /// Column/value pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }
}
