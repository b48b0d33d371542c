pub mod convert;
pub mod directory;

pub use convert::convert_file;
pub use directory::{discover, process_directory, process_directory_with};
