use clap::error::{Error as ClapError, ErrorKind};

/// Exit codes shared by the command-line tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    /// Wrong arguments; nothing was read or written.
    Usage = 1,
    /// A directory, file or document could not be processed.
    Failure = 2,
    /// `--check` found entries out of order.
    Unsorted = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Prints a clap parse error and picks the exit code for it.
///
/// `--help` and `--version` print to stdout and succeed; every other parse
/// error prints the usage message to stderr.
pub fn report_parse_error(err: ClapError) -> ExitCode {
    // Nothing sensible to do if the terminal is gone.
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
        _ => ExitCode::Usage,
    }
}
