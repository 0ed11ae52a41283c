//! # Courtside Log
//!
//! `tracing` subscriber setup shared by courtside binaries and test suites.
//! Library crates only emit events; installing a subscriber is left to the
//! process that owns `main` (or to a test via [`init_test`]).
//!
//! ```rust,no_run
//! let _guard = courtside_log::auto_init()?;
//! tracing::info!(step = "venue_basics", "step accepted");
//! # Ok::<(), courtside_log::LogError>(())
//! ```
//!
//! Environment:
//!
//! - `COURTSIDE_LOG` (or `RUST_LOG`): filter directives
//! - `COURTSIDE_LOG_FORMAT`: `pretty`, `compact` or `json`

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, Writer};
pub use error::{LogError, LogResult};

/// Auto-detect and initialize the best logging configuration
///
/// Explicit environment settings win; otherwise debug builds get
/// [`Config::development`] and release builds [`Config::production`].
pub fn auto_init() -> LogResult<LoggerGuard> {
    if std::env::var_os("COURTSIDE_LOG").is_some() || std::env::var_os("RUST_LOG").is_some() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize for tests.
///
/// Safe to call from every test: once any subscriber is set, later calls
/// return a no-op guard instead of failing.
pub fn init_test() -> LogResult<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }
    match init_with(Config::test()) {
        Err(LogError::AlreadyInitialized(_)) => Ok(LoggerGuard::noop()),
        other => other,
    }
}
