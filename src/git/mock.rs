use crate::error::{ReleaseError, Result};
use crate::git::{CommitInfo, Repository};

/// Mock repository for testing without actual git operations
///
/// Commits are stored oldest first, the way tests naturally write them, and
/// handed out newest first like a real walk.
pub struct MockRepository {
    tags: Vec<String>,
    commits: Vec<CommitInfo>,
    branch: String,
}

impl MockRepository {
    /// Create a new empty mock repository on branch "main"
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            commits: Vec::new(),
            branch: "main".to_string(),
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Append a commit made after the latest tag
    pub fn add_commit(
        &mut self,
        sha: impl Into<String>,
        author_name: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.commits.push(CommitInfo {
            sha: sha.into(),
            message: message.into(),
            author_name: author_name.into(),
        });
    }

    /// Set the checked out branch
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn commits_between(&self, from_tag: &str, _to_ref: &str) -> Result<Vec<CommitInfo>> {
        if !self.tags.iter().any(|tag| tag == from_tag) {
            return Err(ReleaseError::config(format!("Unknown tag: {}", from_tag)));
        }
        Ok(self.commits.iter().rev().cloned().collect())
    }

    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::new();
        repo.add_tag("1.0.0");
        repo.add_tag("1.1.0");

        let tags = repo.list_tags().unwrap();
        assert_eq!(tags, vec!["1.0.0".to_string(), "1.1.0".to_string()]);
    }

    #[test]
    fn test_mock_repository_returns_newest_first() {
        let mut repo = MockRepository::new();
        repo.add_tag("1.0.0");
        repo.add_commit("aaa", "Author 1", "first commit");
        repo.add_commit("bbb", "Author 2", "second commit");

        let commits = repo.commits_between("1.0.0", "HEAD").unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].sha, "bbb");
        assert_eq!(commits[1].sha, "aaa");
    }

    #[test]
    fn test_mock_repository_unknown_tag() {
        let repo = MockRepository::new();
        assert!(repo.commits_between("9.9.9", "HEAD").is_err());
    }

    #[test]
    fn test_mock_repository_default_branch() {
        let mut repo = MockRepository::default();
        assert_eq!(repo.current_branch().unwrap(), "main");
        repo.set_branch("release/5.0.0");
        assert_eq!(repo.current_branch().unwrap(), "release/5.0.0");
    }
}
