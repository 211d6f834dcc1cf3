//! Error constructors and methods
//!
//! Every constructor is `#[track_caller]`, so the recorded location is the
//! line that raised the error rather than a line inside this crate.

use super::types::{Error, ErrorInner, ErrorKind};
use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::panic::Location;
use std::sync::Arc;

impl Error {
    /// Create a new error with the given kind, using the kind's own message
    #[must_use]
    #[track_caller]
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self::build(kind, message, None, Location::caller())
    }

    /// Create an error with an explicit message
    #[must_use]
    #[track_caller]
    pub fn with_message<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self::build(kind, message.into(), None, Location::caller())
    }

    /// Create an error wrapping a source error; the message is the source's message
    #[must_use]
    #[track_caller]
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = source.to_string();
        Self::build(kind, message, Some(Arc::new(source)), Location::caller())
    }

    fn build(
        kind: ErrorKind,
        message: String,
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                message,
                context: None,
                source,
                location,
            }),
        }
    }

    /// Add context to this error
    ///
    /// The kind, message and raise location are kept and the source is
    /// shared with `self`; only the context text is replaced.
    #[must_use]
    pub fn context<C: fmt::Display>(self, context: C) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                kind: self.inner.kind.clone(),
                message: self.inner.message.clone(),
                context: Some(context.to_string()),
                source: self.inner.source.clone(),
                location: self.inner.location,
            }),
        }
    }

    /// Get the error kind
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Get the error message, without context
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }

    /// Get the error context if any
    #[must_use]
    pub fn get_context(&self) -> Option<&str> {
        self.inner.context.as_deref()
    }

    /// Location the error was raised at
    #[must_use]
    pub fn location(&self) -> &'static Location<'static> {
        self.inner.location
    }

    /// Create a division-by-zero error
    #[must_use]
    #[track_caller]
    pub fn division_by_zero() -> Self {
        Self::new(ErrorKind::DivisionByZero)
    }

    /// Create an I/O error
    #[must_use]
    #[track_caller]
    pub fn io() -> Self {
        Self::new(ErrorKind::Io)
    }

    /// Create a parse error
    #[must_use]
    #[track_caller]
    pub fn parse() -> Self {
        Self::new(ErrorKind::Parse)
    }

    /// Create a validation error
    #[must_use]
    #[track_caller]
    pub fn validation() -> Self {
        Self::new(ErrorKind::Validation)
    }

    /// Create a not found error
    #[must_use]
    #[track_caller]
    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// Create an internal error
    #[must_use]
    #[track_caller]
    pub fn internal() -> Self {
        Self::new(ErrorKind::Internal)
    }

    /// Create an other error with custom message
    #[must_use]
    #[track_caller]
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::new(ErrorKind::Other(msg.into()))
    }
}

impl From<std::io::Error> for Error {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, source)
    }
}

impl From<ParseIntError> for Error {
    #[track_caller]
    fn from(source: ParseIntError) -> Self {
        Self::with_source(ErrorKind::Parse, source)
    }
}

impl From<ParseFloatError> for Error {
    #[track_caller]
    fn from(source: ParseFloatError) -> Self {
        Self::with_source(ErrorKind::Parse, source)
    }
}
