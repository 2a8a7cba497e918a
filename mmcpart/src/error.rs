use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line_number} contains non-ASCII characters")]
    NonAscii { line_number: usize },
    #[error("line {line_number} is not a partition table entry: {line:?}")]
    Parse { line_number: usize, line: String },
    #[error("the {field} value {value} is out of range")]
    NumberOutOfRange { field: &'static str, value: String },
    #[error("the {field} can't be negative (got {value})")]
    Validation { field: &'static str, value: i64 },
    #[error("the partition name is empty")]
    EmptyName,
}

impl Error {
    /// Attach a 1-based line number to a parse failure reported for a lone line.
    pub(crate) fn at_line(self, line_number: usize) -> Self {
        match self {
            Error::Parse { line, .. } => Error::Parse { line_number, line },
            err => err,
        }
    }
}
