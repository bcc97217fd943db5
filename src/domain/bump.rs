use std::fmt;

/// Severity of a version change
///
/// Variants are declared in ascending severity so the derived ordering gives
/// `Major > Minor > Patch > Skip`. `None` sorts below everything; it is only
/// produced by [`crate::domain::detect_bump_type`] for identical or
/// incomparable versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BumpType {
    None,
    Skip,
    Patch,
    Minor,
    Major,
}

impl BumpType {
    /// Running maximum of bump severities, starting from `Skip`
    ///
    /// Stops consuming the iterator once `Major` is reached.
    pub fn aggregate<I>(bumps: I) -> BumpType
    where
        I: IntoIterator<Item = BumpType>,
    {
        let mut current = BumpType::Skip;
        for bump in bumps {
            current = current.max(bump);
            if current.is_saturated() {
                break;
            }
        }
        current
    }

    /// Like [`BumpType::aggregate`] for fallible items
    ///
    /// Stops at the first error or once `Major` is reached, so items after
    /// that point are never produced.
    pub fn try_aggregate<I, E>(bumps: I) -> std::result::Result<BumpType, E>
    where
        I: IntoIterator<Item = std::result::Result<BumpType, E>>,
    {
        let mut current = BumpType::Skip;
        for bump in bumps {
            current = current.max(bump?);
            if current.is_saturated() {
                break;
            }
        }
        Ok(current)
    }

    /// True once no further commit can raise the severity
    pub fn is_saturated(&self) -> bool {
        *self == BumpType::Major
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::None => "none",
            BumpType::Skip => "skip",
            BumpType::Patch => "patch",
            BumpType::Minor => "minor",
            BumpType::Major => "major",
        }
    }
}

impl std::str::FromStr for BumpType {
    type Err = crate::error::ReleaseError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(BumpType::None),
            "skip" => Ok(BumpType::Skip),
            "patch" => Ok(BumpType::Patch),
            "minor" => Ok(BumpType::Minor),
            "major" => Ok(BumpType::Major),
            other => Err(crate::error::ReleaseError::config(format!(
                "unknown bump type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_severity_ordering() {
        assert!(BumpType::Major > BumpType::Minor);
        assert!(BumpType::Minor > BumpType::Patch);
        assert!(BumpType::Patch > BumpType::Skip);
        assert!(BumpType::Skip > BumpType::None);
    }

    #[test]
    fn test_aggregate() {
        assert_eq!(
            BumpType::aggregate([BumpType::Patch, BumpType::Minor, BumpType::Skip]),
            BumpType::Minor
        );
        assert_eq!(
            BumpType::aggregate([BumpType::Skip, BumpType::Skip]),
            BumpType::Skip
        );
        assert_eq!(
            BumpType::aggregate([BumpType::Major, BumpType::Minor]),
            BumpType::Major
        );
        assert_eq!(BumpType::aggregate(std::iter::empty()), BumpType::Skip);
    }

    #[test]
    fn test_aggregate_short_circuits_on_major() {
        let consumed = Cell::new(0);
        let bumps = [BumpType::Patch, BumpType::Major, BumpType::Minor, BumpType::Patch]
            .into_iter()
            .inspect(|_| consumed.set(consumed.get() + 1));

        assert_eq!(BumpType::aggregate(bumps), BumpType::Major);
        assert_eq!(consumed.get(), 2);
    }

    #[test]
    fn test_try_aggregate_stops_at_error() {
        let consumed = Cell::new(0);
        let bumps = [Ok(BumpType::Patch), Err("boom"), Ok(BumpType::Major)]
            .into_iter()
            .inspect(|_| consumed.set(consumed.get() + 1));

        assert_eq!(BumpType::try_aggregate(bumps), Err("boom"));
        assert_eq!(consumed.get(), 2);
    }

    #[test]
    fn test_try_aggregate_short_circuits_on_major() {
        let consumed = Cell::new(0);
        let bumps = [Ok(BumpType::Major), Err("never reached")]
            .into_iter()
            .inspect(|_| consumed.set(consumed.get() + 1));

        assert_eq!(BumpType::try_aggregate(bumps), Ok(BumpType::Major));
        assert_eq!(consumed.get(), 1);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Minor".parse::<BumpType>().unwrap(), BumpType::Minor);
        assert_eq!(BumpType::Patch.to_string(), "patch");
        assert!("huge".parse::<BumpType>().is_err());
    }
}
