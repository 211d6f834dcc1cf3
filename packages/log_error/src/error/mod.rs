//! Error type raised by code that reports through this crate
//!
//! Provides:
//! - A tagged [`ErrorKind`] used as the report's error type
//! - Raise location capture via `#[track_caller]`
//! - Context attachment that keeps the original raise location
//! - `err!`, `bail!` and `ensure!` macros

pub mod constructors;
pub mod display;
pub mod extensions;
pub mod macros;
pub mod types;

pub use extensions::{OptionExt, ResultExt};
pub use types::{Error, ErrorKind, Result};
