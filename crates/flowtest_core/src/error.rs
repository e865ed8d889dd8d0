//! Error types for flowtest_core operations.

use thiserror::Error;

/// Core error type for harness operations.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Teardown found no context, or a context without a test session.
    #[error("Unable to manually clean up test context. Might already be deleted?")]
    CleanupTargetMissing,

    /// The session factory failed to construct a test session.
    #[error("failed to start test session: {0}")]
    SessionStart(String),

    /// A test session's cleanup failed.
    #[error("test session cleanup failed: {0}")]
    Cleanup(String),

    /// A scenario step reported a failure.
    #[error("step failed: {0}")]
    StepFailed(String),

    /// No processor descriptor is registered under the given name.
    #[error("unknown processor: {0}")]
    UnknownProcessor(String),

    /// A time period string could not be parsed.
    #[error("invalid time period: {0:?}")]
    InvalidTimePeriod(String),

    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Serialization error while rendering a descriptor.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::CleanupTargetMissing => Some(
                "Teardown ran without a matching setup. Check that before_scenario ran for this context and that the session was not released twice.",
            ),
            Self::UnknownProcessor(_) => {
                Some("Run 'flowtest processors' to list the known processor descriptors.")
            }
            Self::InvalidTimePeriod(_) => {
                Some("Time periods look like '4 sec', '60 seconds' or '100 ms'.")
            }
            Self::ConfigError(_) => Some("Check flowtest.toml against 'flowtest smoke --help'."),
            _ => None,
        }
    }
}

/// Convenience Result type for flowtest_core operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
