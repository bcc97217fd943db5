//! Native release links for hybrid-common dependency bumps
//!
//! A `pr:phc_dependencies` pull request moves the shared hybrid library to a
//! new version, which in turn pulls in new iOS and Android SDK releases. The
//! changelog lists those native releases under the pull request line.
//!
//! Both the SDK being released and the hybrid library keep a markdown
//! versions table whose first data row records the native versions of the
//! latest release:
//!
//! ```text
//! | Version | iOS version | Android version | Common files version |
//! |---------|-------------|-----------------|----------------------|
//! | 6.1.0   | 4.30.0      | 7.2.0           | 9.1.0                |
//! ```
//!
//! Every failure on this path degrades to "no sub-list".

use crate::boundary::{BoundaryWarning, Degraded};
use crate::config::HybridCommonConfig;
use crate::error::Result;
use crate::github::{GitHubApi, ReleaseInfo};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// File row holding the latest release (header and separator come first)
const LATEST_RELEASE_ROW: usize = 2;

/// Native SDK versions recorded in a versions table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeVersions {
    pub ios: semver::Version,
    pub android: semver::Version,
}

impl NativeVersions {
    /// Read the latest-release row of a versions table
    ///
    /// `source` only names the table in warnings.
    pub fn from_table(table: &str, source: &str) -> Degraded<Self> {
        let malformed = |reason: String| BoundaryWarning::MalformedVersionsRow {
            source: source.to_string(),
            reason,
        };

        let row = table
            .lines()
            .nth(LATEST_RELEASE_ROW)
            .ok_or_else(|| malformed(format!("missing row {}", LATEST_RELEASE_ROW + 1)))?;

        let columns: Vec<&str> = row
            .trim()
            .trim_matches('|')
            .split('|')
            .map(str::trim)
            .collect();

        let (ios, android) = match columns.as_slice() {
            [_, ios, android, ..] => (*ios, *android),
            _ => return Err(malformed(format!("expected iOS and Android columns in '{}'", row))),
        };

        let parse = |column: &str| {
            semver::Version::parse(column)
                .map_err(|err| malformed(format!("'{}' is not a version: {}", column, err)))
        };

        Ok(NativeVersions {
            ios: parse(ios)?,
            android: parse(android)?,
        })
    }
}

/// Stable releases of `repo` with `start < version <= end`, newest first
///
/// Release tags that are not semantic versions are ignored.
pub fn releases_between_tags<G: GitHubApi>(
    github: &G,
    repo: &str,
    start: &semver::Version,
    end: &semver::Version,
) -> Result<Vec<ReleaseInfo>> {
    let mut releases: Vec<(semver::Version, ReleaseInfo)> = github
        .list_releases(repo)?
        .into_iter()
        .filter(|release| !release.prerelease)
        .filter_map(|release| {
            let version = semver::Version::parse(&release.tag_name).ok()?;
            (version.pre.is_empty() && &version > start && &version <= end)
                .then_some((version, release))
        })
        .collect();

    releases.sort_by(|a, b| b.0.cmp(&a.0));
    debug!(repo, %start, %end, count = releases.len(), "native releases in range");
    Ok(releases.into_iter().map(|(_, release)| release).collect())
}

/// Builds the native release sub-list for hybrid-common dependency bumps
pub struct NativeReleaseLinker<'a, G: GitHubApi> {
    github: &'a G,
    config: HybridCommonConfig,
    local_versions_file: PathBuf,
    hybrid_common_version: Option<String>,
}

impl<'a, G: GitHubApi> NativeReleaseLinker<'a, G> {
    /// # Arguments
    /// * `local_versions_file` - Versions table of the SDK being released
    /// * `hybrid_common_version` - Hybrid-common version this release moves to
    pub fn new(
        github: &'a G,
        config: HybridCommonConfig,
        local_versions_file: impl Into<PathBuf>,
        hybrid_common_version: Option<String>,
    ) -> Self {
        NativeReleaseLinker {
            github,
            config,
            local_versions_file: local_versions_file.into(),
            hybrid_common_version,
        }
    }

    /// Markdown sub-list of native releases, one `\n  * [...]` line each
    ///
    /// Android releases come first, then iOS, each newest first. Empty when
    /// neither platform moved.
    pub fn sub_list(&self) -> Degraded<String> {
        let previous = self.previous_versions()?;
        let current = self.current_versions()?;

        let android = self.platform_lines("Android", &self.config.android_repo, &previous.android, &current.android)?;
        let ios = self.platform_lines("iOS", &self.config.ios_repo, &previous.ios, &current.ios)?;

        Ok(android.into_iter().chain(ios).collect())
    }

    fn previous_versions(&self) -> Degraded<NativeVersions> {
        let source = self.local_versions_file.display().to_string();
        let table = fs::read_to_string(&self.local_versions_file).map_err(|err| {
            BoundaryWarning::MalformedVersionsRow {
                source: source.clone(),
                reason: err.to_string(),
            }
        })?;
        NativeVersions::from_table(&table, &source)
    }

    fn current_versions(&self) -> Degraded<NativeVersions> {
        let unavailable = |reason: String| BoundaryWarning::NativeReleasesUnavailable {
            repo: self.config.repo.clone(),
            reason,
        };

        let version = self
            .hybrid_common_version
            .as_deref()
            .ok_or_else(|| unavailable("no hybrid common version given".to_string()))?;

        let table = self
            .github
            .fetch_file(&self.config.repo, version, &self.config.versions_file)
            .map_err(|err| unavailable(err.to_string()))?;

        let source = format!("{}@{}:{}", self.config.repo, version, self.config.versions_file);
        NativeVersions::from_table(&table, &source)
    }

    fn platform_lines(
        &self,
        platform: &str,
        repo: &str,
        start: &semver::Version,
        end: &semver::Version,
    ) -> Degraded<Vec<String>> {
        let releases = releases_between_tags(self.github, repo, start, end).map_err(|err| {
            BoundaryWarning::NativeReleasesUnavailable {
                repo: repo.to_string(),
                reason: err.to_string(),
            }
        })?;

        Ok(releases
            .into_iter()
            .map(|release| format!("\n  * [{} {}]({})", platform, release.tag_name, release.html_url))
            .collect())
    }
}
