use crate::analyzer::ResolverSettings;
use crate::boundary::BoundaryWarning;
use crate::domain::{parse_labels, PullRequestInfo, ResolvedCommit, Tag};
use crate::error::{ReleaseError, Result};
use crate::git::{CommitInfo, Repository};
use crate::github::GitHubApi;
use std::thread;
use tracing::{debug, instrument};

/// Maps commits since the last release to the pull requests that merged them
pub struct CommitResolver<'a, R: Repository, G: GitHubApi> {
    repo: &'a R,
    github: &'a G,
    settings: ResolverSettings,
}

impl<'a, R: Repository, G: GitHubApi> CommitResolver<'a, R, G> {
    pub fn new(repo: &'a R, github: &'a G, settings: ResolverSettings) -> Self {
        CommitResolver {
            repo,
            github,
            settings,
        }
    }

    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    pub fn github(&self) -> &'a G {
        self.github
    }

    /// Highest version tag, optionally ignoring pre-releases
    pub fn latest_tag(&self, include_prereleases: bool) -> Result<Tag> {
        let tags = self.repo.list_tags()?;
        let latest = Tag::latest(tags, include_prereleases).ok_or(ReleaseError::NoReleaseTag)?;
        debug!(tag = %latest.name, include_prereleases, "selected reference tag");
        Ok(latest)
    }

    /// Commits made after `tag` up to HEAD, oldest first
    pub fn commits_since(&self, tag: &Tag) -> Result<Vec<CommitInfo>> {
        let mut commits = self.repo.commits_between(&tag.name, "HEAD")?;
        commits.reverse();
        Ok(commits)
    }

    /// Pull request that merged `sha` into the base branch
    ///
    /// Returns `Ok(None)` when no pull request matches. More than one match
    /// is an [`ReleaseError::AmbiguousCommitResolution`].
    #[instrument(skip(self), fields(base = %self.settings.base_branch))]
    pub fn resolve_pull_request(&self, sha: &str) -> Result<Option<PullRequestInfo>> {
        if !self.settings.rate_limit_delay.is_zero() {
            thread::sleep(self.settings.rate_limit_delay);
        }

        let mut items = self.github.search_pull_requests(
            &self.settings.repo_name,
            sha,
            &self.settings.base_branch,
        )?;

        match items.len() {
            0 => {
                BoundaryWarning::NoPullRequest {
                    sha: sha.to_string(),
                }
                .log();
                Ok(None)
            }
            1 => {
                let item = items.remove(0);
                let pr = PullRequestInfo {
                    number: item.number,
                    title: item.title,
                    labels: parse_labels(&item.labels),
                    author_login: item.author_login,
                };
                debug!(number = pr.number, labels = pr.labels.len(), "resolved pull request");
                Ok(Some(pr))
            }
            count => Err(ReleaseError::AmbiguousCommitResolution {
                sha: sha.to_string(),
                count,
            }),
        }
    }

    /// Attach the merging pull request to a raw commit
    pub fn resolve(&self, commit: CommitInfo) -> Result<ResolvedCommit> {
        let pull_request = self.resolve_pull_request(&commit.sha)?;
        Ok(ResolvedCommit {
            sha: commit.sha,
            author_name: commit.author_name,
            message: commit.message,
            pull_request,
        })
    }
}
