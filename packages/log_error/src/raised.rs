//! Raise locations for foreign error types

use crate::report::Reportable;
use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// A foreign error paired with the location it was raised at
///
/// The error type reported is the Rust type name of `E`.
#[derive(Debug)]
pub struct Raised<E> {
    error: E,
    location: &'static Location<'static>,
}

impl<E> Raised<E> {
    /// Wrap `error`, recording the caller as the raise location
    #[must_use]
    #[track_caller]
    pub fn new(error: E) -> Self {
        Self {
            error,
            location: Location::caller(),
        }
    }

    /// The wrapped error
    #[must_use]
    pub fn error(&self) -> &E {
        &self.error
    }

    /// Unwrap into the wrapped error
    #[must_use]
    pub fn into_inner(self) -> E {
        self.error
    }

    /// Location the error was raised at
    #[must_use]
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl<E: fmt::Display> fmt::Display for Raised<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Raised<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<E: fmt::Display> Reportable for Raised<E> {
    fn error_type(&self) -> Cow<'_, str> {
        Cow::Borrowed(std::any::type_name::<E>())
    }

    fn error_message(&self) -> String {
        self.error.to_string()
    }

    fn raised_at(&self) -> Option<&'static Location<'static>> {
        Some(self.location)
    }
}

/// Wrap the error of a `Result` in [`Raised`]
pub trait RaiseExt<T, E> {
    /// Record the caller as the raise location of the error
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn raised(self) -> Result<T, Raised<E>>;
}

impl<T, E> RaiseExt<T, E> for Result<T, E> {
    #[track_caller]
    fn raised(self) -> Result<T, Raised<E>> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(Raised::new(e)),
        }
    }
}
