use crate::file::error::FileError;
use planner::query::statement::SqlStatement;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Writes statements to a `.sql` script, one per line.
///
/// The file is created (or truncated) on open. Anything already written
/// stays on disk if the caller stops early.
pub struct SqlFileDestination {
    writer: BufWriter<File>,
    written: usize,
}

impl SqlFileDestination {
    pub fn create(path: &Path) -> Result<Self, FileError> {
        let file = File::create(path).map_err(|err| FileError::from_io(path, err))?;
        Ok(SqlFileDestination {
            writer: BufWriter::new(file),
            written: 0,
        })
    }

    pub fn write(&mut self, statement: &SqlStatement) -> Result<(), FileError> {
        self.writer.write_all(statement.as_str().as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Flushes buffered output and returns the number of statements written.
    pub fn finish(mut self) -> Result<usize, FileError> {
        self.writer.flush()?;
        Ok(self.written)
    }
}
