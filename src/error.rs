use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// A record in a trajectory file that could not be interpreted.
///
/// Line numbers are 1-based and count the header lines.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The file does not even hold the header and footer.
    #[error("expected at least {expected} lines (header and footer), found {found}")]
    TooShort { expected: usize, found: usize },

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    MissingFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid time step '{value}': {source}")]
    TimeStep {
        line: usize,
        value: String,
        source: ParseIntError,
    },

    #[error("line {line}: invalid coordinate '{value}': {source}")]
    Coordinate {
        line: usize,
        value: String,
        source: ParseFloatError,
    },
}

impl FormatError {
    /// The line on which the error occurred, if it concerns a single record.
    pub fn line(&self) -> Option<usize> {
        match self {
            FormatError::TooShort { .. } => None,
            FormatError::MissingFields { line, .. }
            | FormatError::TimeStep { line, .. }
            | FormatError::Coordinate { line, .. } => Some(*line),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed trajectory: {0}")]
    Format(#[from] FormatError),

    /// Anything the drawing backend complains about.
    #[error("rendering failed: {0}")]
    Render(String),
}

impl Error {
    pub(crate) fn render(err: impl std::fmt::Display) -> Self {
        Error::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
