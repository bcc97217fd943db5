//! Pre-release suffix handling
//!
//! Tags carry pre-release identifiers of the form `alpha.N`, `beta.N` or
//! `rc.N`. Development builds use the `SNAPSHOT` marker, which is only ever
//! produced by incrementing and is never accepted as input.

use crate::error::{ReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Pre-release identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseType {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
    /// Development snapshot marker
    Snapshot,
}

impl PreReleaseType {
    /// Whether this identifier marks a real pre-release (alpha, beta or rc)
    pub fn is_prerelease(&self) -> bool {
        !matches!(self, PreReleaseType::Snapshot)
    }
}

impl FromStr for PreReleaseType {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(PreReleaseType::Alpha),
            "beta" => Ok(PreReleaseType::Beta),
            "rc" => Ok(PreReleaseType::ReleaseCandidate),
            _ => Err(ReleaseError::invalid_version(format!(
                "unsupported pre-release identifier '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseType::Alpha => write!(f, "alpha"),
            PreReleaseType::Beta => write!(f, "beta"),
            PreReleaseType::ReleaseCandidate => write!(f, "rc"),
            PreReleaseType::Snapshot => write!(f, "SNAPSHOT"),
        }
    }
}

/// Pre-release suffix with its iteration number
///
/// # Examples
/// - "beta.1" -> PreRelease { identifier: Beta, iteration: Some(1) }
/// - "rc.3" -> PreRelease { identifier: ReleaseCandidate, iteration: Some(3) }
/// - snapshot -> PreRelease { identifier: Snapshot, iteration: None }
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreRelease {
    pub identifier: PreReleaseType,
    pub iteration: Option<u64>,
}

impl PreRelease {
    pub fn new(identifier: PreReleaseType, iteration: u64) -> Self {
        PreRelease {
            identifier,
            iteration: Some(iteration),
        }
    }

    /// The `SNAPSHOT` development marker
    pub fn snapshot() -> Self {
        PreRelease {
            identifier: PreReleaseType::Snapshot,
            iteration: None,
        }
    }

    /// Parse a pre-release suffix like "alpha.3"
    ///
    /// The iteration number is mandatory.
    pub fn parse(s: &str) -> Result<Self> {
        let (identifier, iteration) = s.split_once('.').ok_or_else(|| {
            ReleaseError::invalid_version(format!("pre-release '{}' has no iteration", s))
        })?;

        let identifier = identifier.parse::<PreReleaseType>()?;
        if iteration.is_empty() || !iteration.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ReleaseError::invalid_version(format!(
                "invalid pre-release iteration '{}'",
                iteration
            )));
        }
        let iteration = iteration
            .parse::<u64>()
            .map_err(|_| ReleaseError::invalid_version(format!("iteration out of range: {}", s)))?;

        Ok(PreRelease::new(identifier, iteration))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(iter) = self.iteration {
            write!(f, ".{}", iter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prerelease_type_parse() {
        assert_eq!("alpha".parse::<PreReleaseType>().unwrap(), PreReleaseType::Alpha);
        assert_eq!("beta".parse::<PreReleaseType>().unwrap(), PreReleaseType::Beta);
        assert_eq!(
            "rc".parse::<PreReleaseType>().unwrap(),
            PreReleaseType::ReleaseCandidate
        );
    }

    #[test]
    fn test_prerelease_type_rejects_snapshot_and_custom() {
        assert!("SNAPSHOT".parse::<PreReleaseType>().is_err());
        assert!("dev".parse::<PreReleaseType>().is_err());
        assert!("Alpha".parse::<PreReleaseType>().is_err());
    }

    #[test]
    fn test_prerelease_parse_with_iteration() {
        let pr = PreRelease::parse("beta.1").unwrap();
        assert_eq!(pr.identifier, PreReleaseType::Beta);
        assert_eq!(pr.iteration, Some(1));
    }

    #[test]
    fn test_prerelease_requires_iteration() {
        assert!(PreRelease::parse("alpha").is_err());
        assert!(PreRelease::parse("alpha.").is_err());
        assert!(PreRelease::parse("beta.abc").is_err());
        assert!(PreRelease::parse("rc.1.2").is_err());
    }

    #[test]
    fn test_prerelease_display() {
        assert_eq!(PreRelease::parse("rc.2").unwrap().to_string(), "rc.2");
        assert_eq!(PreRelease::snapshot().to_string(), "SNAPSHOT");
    }

    #[test]
    fn test_prerelease_ordering() {
        let alpha = PreRelease::parse("alpha.9").unwrap();
        let beta = PreRelease::parse("beta.1").unwrap();
        let rc1 = PreRelease::parse("rc.1").unwrap();
        let rc10 = PreRelease::parse("rc.10").unwrap();
        assert!(alpha < beta);
        assert!(beta < rc1);
        assert!(rc1 < rc10);
    }

    #[test]
    fn test_snapshot_is_not_a_prerelease() {
        assert!(!PreRelease::snapshot().identifier.is_prerelease());
        assert!(PreReleaseType::Alpha.is_prerelease());
    }
}
