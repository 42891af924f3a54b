use std::io;

use thiserror::Error;

/// Library-wide error type for appforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Input or environment issue.
    #[error("{0}")]
    Validation(String),

    /// The external app-generation command failed.
    #[error("startapp error running '{command}': {details}")]
    Generator { command: String, details: String },
}

impl AppError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }
}
