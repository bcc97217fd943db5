use crate::error::{ReleaseError, Result};
use crate::git::CommitInfo;
use git2::{Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn commits_between(&self, from_tag: &str, to_ref: &str) -> Result<Vec<CommitInfo>> {
        let from = self
            .repo
            .revparse_single(&format!("refs/tags/{}", from_tag))?
            .peel_to_commit()?;
        let to = self.repo.revparse_single(to_ref)?.peel_to_commit()?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to.id())?;
        revwalk.hide(from.id())?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let message = commit.message().unwrap_or("(empty message)").to_string();

            let author_name = commit.author().name().unwrap_or("unknown").to_string();

            commits.push(CommitInfo {
                sha: oid.to_string(),
                message,
                author_name,
            });
        }

        debug!(from_tag, to_ref, count = commits.len(), "walked commit range");
        Ok(commits)
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(ReleaseError::config(
                "HEAD is detached; set base_branch explicitly",
            ));
        }
        head.shorthand()
            .map(|name| name.to_string())
            .ok_or_else(|| ReleaseError::config("Current branch name is not valid UTF-8"))
    }
}
