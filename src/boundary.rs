use std::fmt;

/// Recoverable conditions met while building a changelog or computing a version.
///
/// These never abort a run: the caller logs them and continues with a
/// reduced result (fallback line, omitted sub-list, excluded tag).
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Commit has no associated pull request
    NoPullRequest { sha: String },
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// Versions table is missing the expected row or has unusable columns
    MalformedVersionsRow { source: String, reason: String },
    /// Native release links could not be resolved
    NativeReleasesUnavailable { repo: String, reason: String },
    /// Two versions cannot be compared segment by segment
    IncomparableVersions { from: String, to: String },
}

/// Outcome of a step that may degrade instead of failing.
pub type Degraded<T> = std::result::Result<T, BoundaryWarning>;

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPullRequest { sha } => {
                let short_sha = sha.get(..7).unwrap_or(sha);
                write!(
                    f,
                    "No pull request found for commit {}; using commit information",
                    short_sha
                )
            }
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::MalformedVersionsRow { source, reason } => {
                write!(f, "Malformed versions table in '{}': {}", source, reason)
            }
            BoundaryWarning::NativeReleasesUnavailable { repo, reason } => {
                write!(f, "Cannot list releases of '{}': {}", repo, reason)
            }
            BoundaryWarning::IncomparableVersions { from, to } => {
                write!(
                    f,
                    "Cannot compare versions '{}' and '{}': expected major.minor.patch",
                    from, to
                )
            }
        }
    }
}

impl BoundaryWarning {
    /// Log this warning through tracing
    pub fn log(&self) {
        tracing::warn!("{}", self);
    }
}
