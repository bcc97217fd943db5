//! Git operations abstraction layer
//!
//! The release engine only needs to read tags and walk the commits made
//! since a tag. Those reads go through the [Repository] trait so the engine
//! can be driven by a real repository or by an in-memory mock.
//!
//! - [repository::Git2Repository]: implementation backed by the `git2` crate
//! - [mock::MockRepository]: implementation for tests
//!
//! ```rust
//! # use sdk_release::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tags = repo.list_tags()?;
//! let commits = repo.commits_between("1.2.0", "HEAD")?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Raw commit data, before pull request resolution
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// Full commit hash
    pub sha: String,
    /// Full commit message
    pub message: String,
    /// Author display name
    pub author_name: String,
}

/// Read-only git access needed by the release engine
///
/// All implementors must be `Send`. Implementations map underlying
/// errors (like `git2::Error`) into [crate::error::ReleaseError].
pub trait Repository: Send {
    /// List all tag names in the repository
    ///
    /// No particular order is guaranteed; callers select by version.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Commits reachable from `to_ref` but not from tag `from_tag`
    ///
    /// Returned newest first, the order `git log` prints them in.
    ///
    /// # Arguments
    /// * `from_tag` - Tag marking the previous release (exclusive)
    /// * `to_ref` - Revision to walk from, usually "HEAD" (inclusive)
    fn commits_between(&self, from_tag: &str, to_ref: &str) -> Result<Vec<CommitInfo>>;

    /// Name of the checked out branch
    fn current_branch(&self) -> Result<String>;
}
