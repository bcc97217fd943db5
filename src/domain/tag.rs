use crate::boundary::BoundaryWarning;
use crate::domain::SemanticVersion;
use crate::error::Result;

/// A git tag whose name parses as a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub version: SemanticVersion,
}

impl Tag {
    /// Parse a tag name; the name must be a bare version ("1.2.3", not "v1.2.3")
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let version = SemanticVersion::parse(&name)?;
        Ok(Tag { name, version })
    }

    /// Highest versioned tag among `names`
    ///
    /// Names that are not versions are skipped.
    /// Pre-release tags only take part when `include_prereleases` is set.
    pub fn latest<I, S>(names: I, include_prereleases: bool) -> Option<Tag>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .filter_map(|name| {
                let name = name.into();
                match Tag::parse(name.clone()) {
                    Ok(tag) => Some(tag),
                    Err(err) => {
                        let warning = BoundaryWarning::UnparsableTag {
                            tag: name,
                            reason: err.to_string(),
                        };
                        tracing::debug!("{}", warning);
                        None
                    }
                }
            })
            .filter(|tag| include_prereleases || !tag.version.is_prerelease())
            .max_by(|a, b| a.version.cmp(&b.version))
    }
}
