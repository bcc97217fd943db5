use crate::error::{ReleaseError, Result};
use crate::github::{GitHubApi, PullRequestItem, ReleaseInfo};
use std::collections::HashMap;
use std::sync::Mutex;

/// One recorded pull request search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCall {
    pub repo: String,
    pub sha: String,
    pub base_branch: String,
}

/// Mock GitHub for testing without network access
///
/// Records every search so tests can check which commits were looked up and
/// against which repository and base branch.
#[derive(Default)]
pub struct MockGitHub {
    pull_requests: HashMap<String, Vec<PullRequestItem>>,
    releases: HashMap<String, Vec<ReleaseInfo>>,
    files: HashMap<(String, String, String), String>,
    searched: Mutex<Vec<SearchCall>>,
}

impl MockGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pull request that merged `sha`
    ///
    /// Registering two for the same sha makes its resolution ambiguous.
    pub fn add_pull_request(
        &mut self,
        sha: impl Into<String>,
        number: u64,
        title: impl Into<String>,
        labels: &[&str],
        author_login: Option<&str>,
    ) {
        self.pull_requests
            .entry(sha.into())
            .or_default()
            .push(PullRequestItem {
                number,
                title: title.into(),
                labels: labels.iter().map(|l| l.to_string()).collect(),
                author_login: author_login.map(str::to_string),
            });
    }

    /// Register a release of `repo`; add newest first
    pub fn add_release(
        &mut self,
        repo: impl Into<String>,
        tag_name: impl Into<String>,
        prerelease: bool,
    ) {
        let repo = repo.into();
        let tag_name = tag_name.into();
        let html_url = format!("https://github.com/{}/releases/tag/{}", repo, tag_name);
        self.releases.entry(repo).or_default().push(ReleaseInfo {
            name: Some(tag_name.clone()),
            tag_name,
            html_url,
            prerelease,
        });
    }

    /// Register the content of `path` in `repo` at `git_ref`
    pub fn add_file(
        &mut self,
        repo: impl Into<String>,
        git_ref: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.files
            .insert((repo.into(), git_ref.into(), path.into()), content.into());
    }

    /// Calls made to `search_pull_requests`, in call order
    pub fn searches(&self) -> Vec<SearchCall> {
        self.searched
            .lock()
            .map(|searched| searched.clone())
            .unwrap_or_default()
    }

    /// Shas passed to `search_pull_requests`, in call order
    pub fn searched_shas(&self) -> Vec<String> {
        self.searches().into_iter().map(|call| call.sha).collect()
    }
}

impl GitHubApi for MockGitHub {
    fn search_pull_requests(
        &self,
        repo: &str,
        sha: &str,
        base_branch: &str,
    ) -> Result<Vec<PullRequestItem>> {
        if let Ok(mut searched) = self.searched.lock() {
            searched.push(SearchCall {
                repo: repo.to_string(),
                sha: sha.to_string(),
                base_branch: base_branch.to_string(),
            });
        }
        Ok(self.pull_requests.get(sha).cloned().unwrap_or_default())
    }

    fn list_releases(&self, repo: &str) -> Result<Vec<ReleaseInfo>> {
        self.releases
            .get(repo)
            .cloned()
            .ok_or_else(|| ReleaseError::github(format!("Repository not found: {}", repo)))
    }

    fn fetch_file(&self, repo: &str, git_ref: &str, path: &str) -> Result<String> {
        self.files
            .get(&(repo.to_string(), git_ref.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| {
                ReleaseError::github(format!("File not found: {}@{}:{}", repo, git_ref, path))
            })
    }
}
