use crate::domain::PrLabel;
use std::collections::BTreeSet;

/// Changelog section a line is rendered under
///
/// Declaration order is the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangelogSection {
    BreakingChanges,
    NewFeatures,
    Paywalls,
    Fixes,
    Performance,
    DependencyUpdates,
    Other,
}

/// Labels in the order they are consulted when picking a section
const SECTION_PRIORITY: [PrLabel; 7] = [
    PrLabel::Breaking,
    PrLabel::RevenueCatUi,
    PrLabel::Feat,
    PrLabel::Fix,
    PrLabel::Perf,
    PrLabel::Dependencies,
    PrLabel::PhcDependencies,
];

impl ChangelogSection {
    pub const ALL: [ChangelogSection; 7] = [
        ChangelogSection::BreakingChanges,
        ChangelogSection::NewFeatures,
        ChangelogSection::Paywalls,
        ChangelogSection::Fixes,
        ChangelogSection::Performance,
        ChangelogSection::DependencyUpdates,
        ChangelogSection::Other,
    ];

    /// Markdown heading, part of the committed changelog format
    pub fn heading(&self) -> &'static str {
        match self {
            ChangelogSection::BreakingChanges => "### Breaking Changes",
            ChangelogSection::NewFeatures => "### New Features",
            ChangelogSection::Paywalls => "### RevenueCatUI",
            ChangelogSection::Fixes => "### Bugfixes",
            ChangelogSection::Performance => "### Performance Improvements",
            ChangelogSection::DependencyUpdates => "### Dependency Updates",
            ChangelogSection::Other => "### Other Changes",
        }
    }

    /// Pick the section for a pull request from its labels
    pub fn for_labels(labels: &BTreeSet<PrLabel>) -> ChangelogSection {
        SECTION_PRIORITY
            .iter()
            .find(|label| labels.contains(*label))
            .and_then(PrLabel::section)
            .unwrap_or(ChangelogSection::Other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_labels;

    fn section(raw: &[&str]) -> ChangelogSection {
        ChangelogSection::for_labels(&parse_labels(raw.iter().copied()))
    }

    #[test]
    fn test_single_label_sections() {
        assert_eq!(section(&["pr:breaking"]), ChangelogSection::BreakingChanges);
        assert_eq!(section(&["pr:feat"]), ChangelogSection::NewFeatures);
        assert_eq!(section(&["pr:revenuecatui"]), ChangelogSection::Paywalls);
        assert_eq!(section(&["pr:fix"]), ChangelogSection::Fixes);
        assert_eq!(section(&["pr:perf"]), ChangelogSection::Performance);
        assert_eq!(
            section(&["pr:dependencies"]),
            ChangelogSection::DependencyUpdates
        );
        assert_eq!(
            section(&["pr:phc_dependencies"]),
            ChangelogSection::DependencyUpdates
        );
        assert_eq!(section(&["pr:ci"]), ChangelogSection::Other);
        assert_eq!(section(&[]), ChangelogSection::Other);
    }

    #[test]
    fn test_priority_between_labels() {
        assert_eq!(
            section(&["pr:feat", "pr:breaking"]),
            ChangelogSection::BreakingChanges
        );
        assert_eq!(
            section(&["pr:feat", "pr:revenuecatui"]),
            ChangelogSection::Paywalls
        );
        assert_eq!(section(&["pr:fix", "pr:feat"]), ChangelogSection::NewFeatures);
        assert_eq!(section(&["pr:perf", "pr:fix"]), ChangelogSection::Fixes);
        assert_eq!(
            section(&["pr:dependencies", "pr:perf"]),
            ChangelogSection::Performance
        );
    }

    #[test]
    fn test_force_labels_have_no_section() {
        assert_eq!(section(&["pr:force_minor"]), ChangelogSection::Other);
        assert_eq!(
            section(&["pr:force_major", "pr:fix"]),
            ChangelogSection::Fixes
        );
    }

    #[test]
    fn test_rendering_order() {
        let mut sorted = ChangelogSection::ALL;
        sorted.sort();
        assert_eq!(sorted, ChangelogSection::ALL);
        assert_eq!(ChangelogSection::ALL[0].heading(), "### Breaking Changes");
        assert_eq!(ChangelogSection::ALL[6].heading(), "### Other Changes");
    }
}
