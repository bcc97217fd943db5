//! Release analysis: commit resolution, changelog building and next-version computation
//!
//! Everything here runs strictly sequentially. Commits are resolved oldest
//! first, one GitHub call at a time, optionally throttled by a fixed delay.

pub mod changelog;
pub mod native_releases;
pub mod resolver;
pub mod version_analyzer;

pub use changelog::ChangelogBuilder;
pub use native_releases::{releases_between_tags, NativeReleaseLinker, NativeVersions};
pub use resolver::CommitResolver;
pub use version_analyzer::{NextVersion, VersionAnalyzer};

use std::time::Duration;

/// Settings shared by every GitHub-backed analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverSettings {
    /// GitHub repository, "owner/name"
    pub repo_name: String,
    /// Branch pull requests must target
    pub base_branch: String,
    /// Pause before each pull request search
    pub rate_limit_delay: Duration,
}

impl ResolverSettings {
    pub fn new(repo_name: impl Into<String>, base_branch: impl Into<String>) -> Self {
        ResolverSettings {
            repo_name: repo_name.into(),
            base_branch: base_branch.into(),
            rate_limit_delay: Duration::ZERO,
        }
    }

    pub fn with_rate_limit_delay(mut self, delay: Duration) -> Self {
        self.rate_limit_delay = delay;
        self
    }
}
