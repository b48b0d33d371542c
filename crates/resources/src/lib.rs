//! Sorting of Android-style `strings.xml` resource files.
//!
//! The root element's direct `<string name="…">` children are reordered by
//! `name`; everything else is left where it was.

pub mod error;
pub mod file;
pub mod sorter;

pub use error::ResourceError;
pub use file::{DEFAULT_STRINGS_PATH, check_file, sort_file};
pub use sorter::{is_sorted, sort_document};
