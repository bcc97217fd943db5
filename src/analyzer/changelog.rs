use crate::analyzer::{CommitResolver, NativeReleaseLinker};
use crate::domain::{ChangelogSection, PrLabel, ResolvedCommit, Tag};
use crate::error::Result;
use crate::git::Repository;
use crate::github::GitHubApi;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Builds the markdown changelog for the commits since the last release
pub struct ChangelogBuilder<'a, R: Repository, G: GitHubApi> {
    resolver: CommitResolver<'a, R, G>,
    include_prereleases: bool,
    native_links: Option<NativeReleaseLinker<'a, G>>,
}

impl<'a, R: Repository, G: GitHubApi> ChangelogBuilder<'a, R, G> {
    pub fn new(resolver: CommitResolver<'a, R, G>, include_prereleases: bool) -> Self {
        ChangelogBuilder {
            resolver,
            include_prereleases,
            native_links: None,
        }
    }

    /// List native releases under hybrid-common dependency bumps
    pub fn with_native_links(mut self, linker: NativeReleaseLinker<'a, G>) -> Self {
        self.native_links = Some(linker);
        self
    }

    /// Changelog since the latest release tag
    pub fn build(&self) -> Result<String> {
        let tag = self.resolver.latest_tag(self.include_prereleases)?;
        self.build_since(&tag)
    }

    /// Changelog for the commits made after `tag`
    ///
    /// Fails without output if any commit resolves to several pull requests.
    #[instrument(skip_all, fields(tag = %tag.name))]
    pub fn build_since(&self, tag: &Tag) -> Result<String> {
        let commits = self.resolver.commits_since(tag)?;
        info!(count = commits.len(), "building changelog");

        let mut sections: BTreeMap<ChangelogSection, Vec<String>> = BTreeMap::new();
        let mut native_sub_list: Option<String> = None;

        for commit in commits {
            let resolved = self.resolver.resolve(commit)?;
            let Some(section) = section_for(&resolved) else {
                debug!(sha = %resolved.sha, "excluding next_release pull request");
                continue;
            };

            let mut line = resolved.changelog_line();
            if resolved
                .pull_request
                .as_ref()
                .is_some_and(|pr| pr.has_label(PrLabel::PhcDependencies))
            {
                let sub_list = native_sub_list.get_or_insert_with(|| self.native_sub_list());
                line.push_str(sub_list);
            }

            sections.entry(section).or_default().push(line);
        }

        Ok(render(&sections))
    }

    fn native_sub_list(&self) -> String {
        let Some(linker) = &self.native_links else {
            return String::new();
        };
        linker.sub_list().unwrap_or_else(|warning| {
            warning.log();
            String::new()
        })
    }
}

/// Section a resolved commit belongs to; `None` drops it from the changelog
fn section_for(commit: &ResolvedCommit) -> Option<ChangelogSection> {
    match &commit.pull_request {
        Some(pr) if pr.has_label(PrLabel::NextRelease) => None,
        Some(pr) => Some(ChangelogSection::for_labels(&pr.labels)),
        None => Some(ChangelogSection::Other),
    }
}

/// Render non-empty sections in section order
fn render(sections: &BTreeMap<ChangelogSection, Vec<String>>) -> String {
    sections
        .iter()
        .filter(|(_, lines)| !lines.is_empty())
        .map(|(section, lines)| format!("{}\n{}", section.heading(), lines.join("\n")))
        .collect::<Vec<_>>()
        .join("\n")
}
