//! Extension traits for `Result` and `Option`

use super::types::{Error, ErrorKind};
use std::fmt;

/// Helpers for results whose error converts into [`Error`]
///
/// Conversions go through `Error::from`, so a foreign error converted here is
/// recorded as raised at the caller.
pub trait ResultExt<T> {
    /// Convert the error and attach context to it
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is `Err`.
    fn context<C: fmt::Display>(self, context: C) -> Result<T, Error>;

    /// Reclassify the error as `kind`, raised at the caller
    ///
    /// The original error becomes the source of the new one.
    ///
    /// # Errors
    ///
    /// Returns the new error when `self` is `Err`.
    fn kind(self, kind: ErrorKind) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    Error: From<E>,
    E: std::error::Error + Send + Sync + 'static,
{
    #[track_caller]
    fn context<C: fmt::Display>(self, context: C) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(Error::from(e).context(context)),
        }
    }

    #[track_caller]
    fn kind(self, kind: ErrorKind) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(Error::with_source(kind, e)),
        }
    }
}

/// Helpers for turning a missing value into an [`Error`]
pub trait OptionExt<T> {
    /// Raise an error of `kind` at the caller when the value is `None`
    ///
    /// # Errors
    ///
    /// Returns an error of `kind` when `self` is `None`.
    fn ok_or_kind(self, kind: ErrorKind) -> Result<T, Error>;
}

impl<T> OptionExt<T> for Option<T> {
    #[track_caller]
    fn ok_or_kind(self, kind: ErrorKind) -> Result<T, Error> {
        match self {
            Some(value) => Ok(value),
            None => Err(Error::new(kind)),
        }
    }
}
