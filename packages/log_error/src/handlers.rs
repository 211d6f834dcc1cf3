//! Catch-all handler functions
//!
//! These log the report of whatever error reaches them, so a generic handler
//! does not need to know the error's type.

use crate::report::{format_error, ReportError, Reportable};

/// Log the report for `error` at `error` level
///
/// # Errors
///
/// Returns the [`ReportError`] if no report could be built; nothing is logged
/// in that case.
pub fn log_error(error: &dyn Reportable) -> Result<(), ReportError> {
    let report = format_error(error)?;
    log::error!("{report}");
    Ok(())
}

/// Pass-through error handler that logs the report before returning the error
///
/// When no report can be built a warning naming the reason is logged instead.
pub fn on_error<E: Reportable>(error: E) -> E {
    if let Err(e) = log_error(&error) {
        log::warn!("Error occurred but could not be reported: {e}");
    }
    tracing::trace!("Error passed through handler");
    error
}

/// Log the report if `outcome` failed, otherwise hand back the value
pub fn log_outcome<T, E: Reportable>(outcome: Result<T, E>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(e) => {
            on_error(e);
            None
        }
    }
}
