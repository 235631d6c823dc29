use rustyline::error::ReadlineError;
use std::{fmt, io};

/// Utility enum to package errors that stop the REPL itself, as opposed to errors in the
/// expressions it evaluates, which are reported and skipped.
#[derive(Debug)]
pub enum Error {
    /// The input file or stdin could not be read, or a report could not be written.
    Io(io::Error),

    /// The line editor failed.
    Readline(ReadlineError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{}", err),
            Self::Readline(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}
