//! Logger setup for programs that report errors through this crate
//!
//! Reports are emitted through the `log` facade; `env_logger` is the backend.
//! `tracing` events are forwarded to the same backend when no tracing
//! subscriber is installed.
//! Levels come from `RUST_LOG`:
//! - `RUST_LOG=error` - Only error reports
//! - `RUST_LOG=debug` - Also entry-point resolution details
//! - `RUST_LOG=log_error=warn` - Module-specific levels

use log::{info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize logging (call once at application startup)
///
/// If the program already installed another logger, that logger is kept.
pub fn init() {
    INIT_LOGGER.call_once(|| {
        match env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .try_init()
        {
            Ok(()) => info!("Error report logging initialized"),
            Err(e) => warn!("Keeping the existing logger: {e}"),
        }
    });
}

/// Initialize logging for test environments
///
/// Safe to call from every test; later calls are ignored.
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
