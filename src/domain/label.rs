//! Pull request labels recognised by the release tooling

use crate::domain::{BumpType, ChangelogSection};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A label from the fixed allow-list
///
/// Raw label strings are converted once, when a pull request is resolved;
/// anything not on the list is dropped there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrLabel {
    Breaking,
    Feat,
    Fix,
    Perf,
    Dependencies,
    PhcDependencies,
    RevenueCatUi,
    Build,
    Ci,
    Refactor,
    Style,
    Test,
    NextRelease,
    Docs,
    ForceMajor,
    ForceMinor,
    ForcePatch,
}

impl PrLabel {
    pub const ALL: [PrLabel; 17] = [
        PrLabel::Breaking,
        PrLabel::Feat,
        PrLabel::Fix,
        PrLabel::Perf,
        PrLabel::Dependencies,
        PrLabel::PhcDependencies,
        PrLabel::RevenueCatUi,
        PrLabel::Build,
        PrLabel::Ci,
        PrLabel::Refactor,
        PrLabel::Style,
        PrLabel::Test,
        PrLabel::NextRelease,
        PrLabel::Docs,
        PrLabel::ForceMajor,
        PrLabel::ForceMinor,
        PrLabel::ForcePatch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrLabel::Breaking => "pr:breaking",
            PrLabel::Feat => "pr:feat",
            PrLabel::Fix => "pr:fix",
            PrLabel::Perf => "pr:perf",
            PrLabel::Dependencies => "pr:dependencies",
            PrLabel::PhcDependencies => "pr:phc_dependencies",
            PrLabel::RevenueCatUi => "pr:revenuecatui",
            PrLabel::Build => "pr:build",
            PrLabel::Ci => "pr:ci",
            PrLabel::Refactor => "pr:refactor",
            PrLabel::Style => "pr:style",
            PrLabel::Test => "pr:test",
            PrLabel::NextRelease => "pr:next_release",
            PrLabel::Docs => "pr:docs",
            PrLabel::ForceMajor => "pr:force_major",
            PrLabel::ForceMinor => "pr:force_minor",
            PrLabel::ForcePatch => "pr:force_patch",
        }
    }

    /// Bump severity this label asks for
    pub const fn bump(&self) -> BumpType {
        match self {
            PrLabel::Breaking | PrLabel::ForceMajor => BumpType::Major,
            PrLabel::Feat | PrLabel::RevenueCatUi | PrLabel::ForceMinor => BumpType::Minor,
            PrLabel::Fix
            | PrLabel::Perf
            | PrLabel::Dependencies
            | PrLabel::PhcDependencies
            | PrLabel::ForcePatch => BumpType::Patch,
            PrLabel::Build
            | PrLabel::Ci
            | PrLabel::Refactor
            | PrLabel::Style
            | PrLabel::Test
            | PrLabel::NextRelease
            | PrLabel::Docs => BumpType::Skip,
        }
    }

    /// Section this label claims, if it claims one
    pub const fn section(&self) -> Option<ChangelogSection> {
        match self {
            PrLabel::Breaking => Some(ChangelogSection::BreakingChanges),
            PrLabel::RevenueCatUi => Some(ChangelogSection::Paywalls),
            PrLabel::Feat => Some(ChangelogSection::NewFeatures),
            PrLabel::Fix => Some(ChangelogSection::Fixes),
            PrLabel::Perf => Some(ChangelogSection::Performance),
            PrLabel::Dependencies | PrLabel::PhcDependencies => {
                Some(ChangelogSection::DependencyUpdates)
            }
            _ => None,
        }
    }
}

impl FromStr for PrLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        PrLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == normalized)
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for PrLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert raw label names, dropping any that are not on the allow-list
pub fn parse_labels<I, S>(raw: I) -> BTreeSet<PrLabel>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|name| match name.as_ref().parse::<PrLabel>() {
            Ok(label) => Some(label),
            Err(unknown) => {
                tracing::debug!(label = %unknown, "ignoring unrecognised label");
                None
            }
        })
        .collect()
}

/// Highest bump severity among the labels, `Skip` when none match
pub fn classify_labels(labels: &BTreeSet<PrLabel>) -> BumpType {
    labels
        .iter()
        .map(PrLabel::bump)
        .max()
        .unwrap_or(BumpType::Skip)
}
