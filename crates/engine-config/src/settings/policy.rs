use serde::{Deserialize, Serialize};
use std::fmt;

/// What a directory run does after one file fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop at the first failing file; later files are not attempted.
    #[default]
    Abort,
    /// Record the failure and keep converting the remaining files.
    Continue,
}

/// What a file conversion does with a row whose field count is off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPolicy {
    /// Fail the file; statements already written stay in the output.
    #[default]
    Fail,
    /// Log the row and leave it out of the output.
    Skip,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Abort => f.write_str("abort"),
            ErrorPolicy::Continue => f.write_str("continue"),
        }
    }
}

impl fmt::Display for RowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowPolicy::Fail => f.write_str("fail"),
            RowPolicy::Skip => f.write_str("skip"),
        }
    }
}
