//! Errors raised while installing the subscriber.

/// Result alias for logger operations.
pub type LogResult<T> = Result<T, LogError>;

/// Logger initialization failures.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The level directive string did not parse.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// Directive string as configured.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed for this process.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}
