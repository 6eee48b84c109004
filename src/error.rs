use std::io;

use thiserror::Error;

/// Library-wide error type for aocgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Year or day count outside the accepted range.
    #[error("{0}")]
    InvalidInput(String),

    /// Template rendering failure.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl AppError {
    pub(crate) fn invalid_input<S: Into<String>>(message: S) -> Self {
        AppError::InvalidInput(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidInput(_) => io::ErrorKind::InvalidInput,
            AppError::Template(_) => io::ErrorKind::InvalidData,
        }
    }
}
