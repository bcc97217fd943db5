use crate::analyzer::CommitResolver;
use crate::domain::{classify_labels, BumpType, Tag};
use crate::error::Result;
use crate::git::Repository;
use crate::github::GitHubApi;
use tracing::info;

/// Result of the next-version computation
#[derive(Debug, Clone, PartialEq)]
pub struct NextVersion {
    /// Tag the computation started from
    pub previous: Tag,
    /// Version to release; equals the previous one when `bump` is `Skip`
    pub version: String,
    /// Highest bump requested by the merged pull requests
    pub bump: BumpType,
}

impl NextVersion {
    /// Whether any merged pull request warrants a release
    pub fn is_release_needed(&self) -> bool {
        self.bump != BumpType::Skip
    }
}

/// Determines the next version from the labels of merged pull requests
pub struct VersionAnalyzer<'a, R: Repository, G: GitHubApi> {
    resolver: CommitResolver<'a, R, G>,
    include_prereleases: bool,
    build_metadata: Option<String>,
}

impl<'a, R: Repository, G: GitHubApi> VersionAnalyzer<'a, R, G> {
    pub fn new(resolver: CommitResolver<'a, R, G>, include_prereleases: bool) -> Self {
        VersionAnalyzer {
            resolver,
            include_prereleases,
            build_metadata: None,
        }
    }

    /// Append `+metadata` to the computed version when a release is needed
    pub fn with_build_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.build_metadata = Some(metadata.into());
        self
    }

    /// Compute the next version since the latest release tag
    pub fn determine_next_version(&self) -> Result<NextVersion> {
        let previous = self.resolver.latest_tag(self.include_prereleases)?;
        let bump = self.analyze_since(&previous)?;

        let mut next = previous.version.increment(bump, false)?;
        if bump != BumpType::Skip {
            if let Some(metadata) = &self.build_metadata {
                next = next.with_build_metadata(metadata)?;
            }
        }

        let version = if bump == BumpType::Skip {
            previous.name.clone()
        } else {
            next.to_string()
        };

        info!(previous = %previous.name, %version, %bump, "determined next version");
        Ok(NextVersion {
            previous,
            version,
            bump,
        })
    }

    /// Aggregate bump of the commits made after `tag`
    ///
    /// Commits without a pull request do not count. Stops searching once a
    /// major bump is found; an ambiguous commit aborts.
    pub fn analyze_since(&self, tag: &Tag) -> Result<BumpType> {
        let commits = self.resolver.commits_since(tag)?;

        BumpType::try_aggregate(commits.iter().map(|commit| -> Result<BumpType> {
            let pr = self.resolver.resolve_pull_request(&commit.sha)?;
            Ok(pr.map_or(BumpType::Skip, |pr| classify_labels(&pr.labels)))
        }))
    }
}
