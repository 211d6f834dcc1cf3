//! Core error types and definitions

use std::panic::Location;
use std::sync::Arc;
use thiserror::Error;

/// Error carrying its kind, message and the location it was raised at
#[derive(Debug, Clone)]
pub struct Error {
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    pub kind: ErrorKind,
    pub message: String,
    pub context: Option<String>,
    pub source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    /// Where the error was created
    pub location: &'static Location<'static>,
}

/// Different kinds of errors that can be raised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Integer division or remainder by zero
    #[error("division by zero")]
    DivisionByZero,

    /// I/O related errors
    #[error("I/O error")]
    Io,

    /// Text could not be parsed into a value
    #[error("parse error")]
    Parse,

    /// Input failed validation
    #[error("validation error")]
    Validation,

    /// Not found
    #[error("not found")]
    NotFound,

    /// Internal error
    #[error("internal error")]
    Internal,

    /// Other error with custom message
    #[error("{0}")]
    Other(String),
}

impl ErrorKind {
    /// Identifier printed on the `ERROR TYPE` line
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "DivisionByZero",
            Self::Io => "Io",
            Self::Parse => "Parse",
            Self::Validation => "Validation",
            Self::NotFound => "NotFound",
            Self::Internal => "Internal",
            Self::Other(_) => "Other",
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
