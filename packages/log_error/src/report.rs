//! Formatting of handled errors into the four-line report
//!
//! The report layout is fixed because log sinks and people grep for it:
//!
//! ```text
//!
//!     FILE PATH: <absolute path>
//!     LINE NUMBER: <integer>
//!     ERROR TYPE: <type identifier>
//!     ERROR MESSAGE: <message text>
//! ```
//!
//! The output starts with a newline and has no trailing newline.

use crate::entry_point::entry_point_path;
use crate::error::Error;
use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::path::{Path, PathBuf};

/// An error that can be described in a report
///
/// Implemented by every error a catch-all handler may need to format, so the
/// handler can work over `&dyn Reportable` regardless of the concrete type.
pub trait Reportable {
    /// Identifier of the error's kind or type
    fn error_type(&self) -> Cow<'_, str>;

    /// Human-readable message attached to the error
    fn error_message(&self) -> String;

    /// Where the error was raised, if it was recorded
    fn raised_at(&self) -> Option<&'static Location<'static>>;
}

impl Reportable for Error {
    fn error_type(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.kind().label())
    }

    fn error_message(&self) -> String {
        self.to_string()
    }

    fn raised_at(&self) -> Option<&'static Location<'static>> {
        Some(self.location())
    }
}

impl<R: Reportable + ?Sized> Reportable for &R {
    fn error_type(&self) -> Cow<'_, str> {
        (**self).error_type()
    }

    fn error_message(&self) -> String {
        (**self).error_message()
    }

    fn raised_at(&self) -> Option<&'static Location<'static>> {
        (**self).raised_at()
    }
}

impl<R: Reportable + ?Sized> Reportable for Box<R> {
    fn error_type(&self) -> Cow<'_, str> {
        (**self).error_type()
    }

    fn error_message(&self) -> String {
        (**self).error_message()
    }

    fn raised_at(&self) -> Option<&'static Location<'static>> {
        (**self).raised_at()
    }
}

/// Reasons a report cannot be built
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    /// The formatter was asked to report on an outcome that did not fail
    #[error("no error is being handled")]
    NoActiveError,

    /// The error does not carry a raise location, so there is no line number
    #[error("{error_type} does not record where it was raised")]
    MissingLocation {
        /// Type identifier of the offending error
        error_type: String,
    },
}

/// A formatted error report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    file_path: PathBuf,
    line_number: u32,
    error_type: String,
    error_message: String,
}

impl ErrorReport {
    /// Build a report for `error` using the running program's path
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingLocation`] if `error` has no raise location.
    pub fn capture(error: &dyn Reportable) -> Result<Self, ReportError> {
        ErrorFormatter::new().report(error)
    }

    /// Absolute path of the entry-point program
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Line the error was raised at
    #[must_use]
    pub fn line_number(&self) -> u32 {
        self.line_number
    }

    /// Type identifier of the error
    #[must_use]
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// Message of the error
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n    FILE PATH: {}\n    LINE NUMBER: {}\n    ERROR TYPE: {}\n    ERROR MESSAGE: {}",
            self.file_path.display(),
            self.line_number,
            self.error_type,
            self.error_message
        )
    }
}

/// Builds [`ErrorReport`]s
///
/// By default the file path is resolved from argument zero on every call.
#[derive(Debug, Clone, Default)]
pub struct ErrorFormatter {
    entry_point: Option<PathBuf>,
}

impl ErrorFormatter {
    /// Formatter that reports the running program's path
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `path` as the file path instead of resolving argument zero
    #[must_use]
    pub fn entry_point<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.entry_point = Some(path.into());
        self
    }

    /// Build a report for `error`
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingLocation`] if `error` has no raise location.
    pub fn report(&self, error: &dyn Reportable) -> Result<ErrorReport, ReportError> {
        let location = error
            .raised_at()
            .ok_or_else(|| ReportError::MissingLocation {
                error_type: error.error_type().into_owned(),
            })?;

        let file_path = match &self.entry_point {
            Some(path) => path.clone(),
            None => entry_point_path(),
        };

        Ok(ErrorReport {
            file_path,
            line_number: location.line(),
            error_type: error.error_type().into_owned(),
            error_message: error.error_message(),
        })
    }

    /// Format `error` into the report text
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingLocation`] if `error` has no raise location.
    pub fn format(&self, error: &dyn Reportable) -> Result<String, ReportError> {
        self.report(error).map(|report| report.to_string())
    }

    /// Format the error held by `outcome`
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::NoActiveError`] when `outcome` is `Ok`, and
    /// [`ReportError::MissingLocation`] if the error has no raise location.
    pub fn format_outcome<T, E: Reportable>(
        &self,
        outcome: &Result<T, E>,
    ) -> Result<String, ReportError> {
        match outcome {
            Ok(_) => Err(ReportError::NoActiveError),
            Err(e) => self.format(e),
        }
    }
}

/// Format `error` into the report text, using the running program's path
///
/// # Errors
///
/// Returns [`ReportError::MissingLocation`] if `error` has no raise location.
pub fn format_error(error: &dyn Reportable) -> Result<String, ReportError> {
    ErrorFormatter::new().format(error)
}

/// Format the error held by `outcome`, using the running program's path
///
/// # Errors
///
/// Returns [`ReportError::NoActiveError`] when `outcome` is `Ok`.
pub fn format_outcome<T, E: Reportable>(outcome: &Result<T, E>) -> Result<String, ReportError> {
    ErrorFormatter::new().format_outcome(outcome)
}
