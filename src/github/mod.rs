//! GitHub access layer
//!
//! The release engine asks GitHub three things: which pull requests merged a
//! commit, which releases a repository has, and the content of a file at a
//! given ref. [GitHubApi] abstracts those calls.
//!
//! - [client::GitHubClient]: REST implementation over `reqwest`
//! - [mock::MockGitHub]: in-memory implementation for tests
//!
//! Retries and rate-limit handling of HTTP responses belong here, not in
//! the engine; the engine only throttles how often it calls in.

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::{MockGitHub, SearchCall};

use crate::error::Result;

/// Pull request search hit, with raw label names
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestItem {
    pub number: u64,
    pub title: String,
    pub labels: Vec<String>,
    pub author_login: Option<String>,
}

/// Published GitHub release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseInfo {
    pub tag_name: String,
    pub name: Option<String>,
    pub html_url: String,
    pub prerelease: bool,
}

/// GitHub operations needed by the release engine
pub trait GitHubApi: Send {
    /// Pull requests in `repo` targeting `base_branch` that contain commit `sha`
    fn search_pull_requests(
        &self,
        repo: &str,
        sha: &str,
        base_branch: &str,
    ) -> Result<Vec<PullRequestItem>>;

    /// Every release of `repo`, newest first
    fn list_releases(&self, repo: &str) -> Result<Vec<ReleaseInfo>>;

    /// Raw content of `path` in `repo` at `git_ref`
    fn fetch_file(&self, repo: &str, git_ref: &str, path: &str) -> Result<String>;
}
