//! Domain logic - pure release rules independent of git and GitHub access

pub mod bump;
pub mod commit;
pub mod label;
pub mod prerelease;
pub mod section;
pub mod tag;
pub mod version;

pub use bump::BumpType;
pub use commit::{PullRequestInfo, ResolvedCommit};
pub use label::{classify_labels, parse_labels, PrLabel};
pub use prerelease::{PreRelease, PreReleaseType};
pub use section::ChangelogSection;
pub use tag::Tag;
pub use version::{detect_bump_type, increment_version, SemanticVersion};
