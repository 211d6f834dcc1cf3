//! Error reports for generic error handlers
//!
//! This crate turns whatever error a catch-all handler is holding into a
//! fixed four-line report:
//!
//! ```text
//!
//!     FILE PATH: /app/main
//!     LINE NUMBER: 42
//!     ERROR TYPE: DivisionByZero
//!     ERROR MESSAGE: division by zero
//! ```
//!
//! The error is passed explicitly. Anything implementing [`Reportable`] can be
//! formatted: the crate's own [`Error`], or any foreign error wrapped in
//! [`Raised`]. The line number is the location where the error was raised,
//! captured with `#[track_caller]`.
//!
//! ```no_run
//! use log_error::{log_error, Error, Result};
//!
//! fn todos() -> Result<Vec<&'static str>> {
//!     Err(Error::not_found())
//! }
//!
//! if let Err(e) = todos() {
//!     let _ = log_error(&e);
//! }
//! ```

pub mod entry_point;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod raised;
pub mod report;

pub use entry_point::entry_point_path;
pub use error::{Error, ErrorKind, OptionExt, Result, ResultExt};
pub use handlers::{log_error, log_outcome, on_error};
pub use raised::{RaiseExt, Raised};
pub use report::{
    format_error, format_outcome, ErrorFormatter, ErrorReport, ReportError, Reportable,
};
