use thiserror::Error;

/// Unified error type for release automation.
///
/// Every variant is fatal: it aborts the changelog or version computation
/// that raised it. Recoverable conditions are reported as
/// [`crate::boundary::BoundaryWarning`] instead.
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Commit {sha} is associated with {count} pull requests; cannot determine its labels")]
    AmbiguousCommitResolution { sha: String, count: usize },

    #[error("No release tag found")]
    NoReleaseTag,

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("GitHub request failed: {0}")]
    GitHub(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in sdk-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an invalid version error for the offending input
    pub fn invalid_version(input: impl Into<String>) -> Self {
        ReleaseError::InvalidVersionFormat(input.into())
    }

    /// Create a GitHub error with context
    pub fn github(msg: impl Into<String>) -> Self {
        ReleaseError::GitHub(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }
}

impl From<reqwest::Error> for ReleaseError {
    fn from(err: reqwest::Error) -> Self {
        ReleaseError::GitHub(err.to_string())
    }
}
