use crate::domain::{BumpType, PreRelease};
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const VERSION_PATTERN: &str = r"^(\d+)\.(\d+)\.(\d+)(?:-((?:alpha|beta|rc)\.\d+))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$";
const BUILD_METADATA_PATTERN: &str = r"^[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

fn build_metadata_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BUILD_METADATA_PATTERN).expect("build metadata pattern is valid"))
}

/// Semantic version: `major.minor.patch[-prerelease][+build]`
///
/// Instances are immutable; bumping derives a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<PreRelease>,
    pub build_metadata: Option<String>,
}

impl SemanticVersion {
    /// Create a stable version without build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            prerelease: None,
            build_metadata: None,
        }
    }

    /// Parse a version string such as "1.2.3", "2.0.0-rc.1" or "1.0.0+build.5"
    ///
    /// Only `alpha`, `beta` and `rc` pre-releases with a numeric iteration
    /// are accepted. Snapshot versions are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let captures = version_regex()
            .captures(input)
            .ok_or_else(|| ReleaseError::invalid_version(input))?;

        let number = |idx: usize| -> Result<u64> {
            captures[idx]
                .parse::<u64>()
                .map_err(|_| ReleaseError::invalid_version(input))
        };

        let prerelease = captures
            .get(4)
            .map(|m| PreRelease::parse(m.as_str()))
            .transpose()?;

        Ok(SemanticVersion {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            prerelease,
            build_metadata: captures.get(5).map(|m| m.as_str().to_string()),
        })
    }

    /// True for alpha, beta and rc versions
    pub fn is_prerelease(&self) -> bool {
        self.prerelease
            .as_ref()
            .is_some_and(|pr| pr.identifier.is_prerelease())
    }

    pub fn is_snapshot(&self) -> bool {
        self.prerelease
            .as_ref()
            .is_some_and(|pr| !pr.identifier.is_prerelease())
    }

    /// `major.minor.patch` with every suffix dropped
    pub fn core(&self) -> Self {
        SemanticVersion::new(self.major, self.minor, self.patch)
    }

    /// Attach build metadata, validating it against the `+` grammar
    pub fn with_build_metadata(&self, metadata: &str) -> Result<Self> {
        if !build_metadata_regex().is_match(metadata) {
            return Err(ReleaseError::invalid_version(format!(
                "{}+{}",
                self, metadata
            )));
        }
        Ok(SemanticVersion {
            build_metadata: Some(metadata.to_string()),
            ..self.clone()
        })
    }

    /// Compute the next version for a bump
    ///
    /// - `Skip` returns the version unchanged.
    /// - A pre-release is promoted to its stable core whatever the bump.
    /// - Otherwise the matching segment is incremented and lower ones reset.
    ///
    /// Build metadata is always dropped. With `as_snapshot` the result gets
    /// the `-SNAPSHOT` suffix.
    pub fn increment(&self, bump: BumpType, as_snapshot: bool) -> Result<Self> {
        if self.is_snapshot() {
            return Err(ReleaseError::invalid_version(self.to_string()));
        }
        if bump == BumpType::Skip {
            return Ok(self.clone());
        }

        let mut next = if self.is_prerelease() {
            self.core()
        } else {
            let overflow = || ReleaseError::invalid_version(self.to_string());
            match bump {
                BumpType::Major => {
                    SemanticVersion::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
                }
                BumpType::Minor => SemanticVersion::new(
                    self.major,
                    self.minor.checked_add(1).ok_or_else(overflow)?,
                    0,
                ),
                _ => SemanticVersion::new(
                    self.major,
                    self.minor,
                    self.patch.checked_add(1).ok_or_else(overflow)?,
                ),
            }
        };

        if as_snapshot {
            next.prerelease = Some(PreRelease::snapshot());
        }
        Ok(next)
    }

    /// Ordering by semver precedence; build metadata is ignored
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.prerelease, &other.prerelease) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_precedence(other)
            .then_with(|| self.build_metadata.cmp(&other.build_metadata))
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for SemanticVersion {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        SemanticVersion::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pr) = &self.prerelease {
            write!(f, "-{}", pr)?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

/// Parse `current`, bump it and render the result
pub fn increment_version(current: &str, bump: BumpType, as_snapshot: bool) -> Result<String> {
    let version = SemanticVersion::parse(current)?;
    Ok(version.increment(bump, as_snapshot)?.to_string())
}

/// Determine which segment differs between two version strings
///
/// Returns `BumpType::None` for identical strings, and also (after logging)
/// when either side is not a three-segment numeric version.
pub fn detect_bump_type(from: &str, to: &str) -> BumpType {
    if from == to {
        return BumpType::None;
    }

    let (Some(a), Some(b)) = (numeric_segments(from), numeric_segments(to)) else {
        crate::boundary::BoundaryWarning::IncomparableVersions {
            from: from.to_string(),
            to: to.to_string(),
        }
        .log();
        return BumpType::None;
    };

    if a[0] != b[0] {
        BumpType::Major
    } else if a[1] != b[1] {
        BumpType::Minor
    } else {
        BumpType::Patch
    }
}

/// Exactly three dot-separated numeric segments; any suffix makes the
/// string incomparable
fn numeric_segments(version: &str) -> Option<[u64; 3]> {
    let segments = version
        .split('.')
        .map(|s| s.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;

    match segments.as_slice() {
        [major, minor, patch] => Some([*major, *minor, *patch]),
        _ => None,
    }
}
