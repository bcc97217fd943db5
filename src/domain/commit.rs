use crate::domain::PrLabel;
use std::collections::BTreeSet;

/// Pull request a commit was merged through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestInfo {
    pub number: u64,
    pub title: String,
    pub labels: BTreeSet<PrLabel>,
    pub author_login: Option<String>,
}

impl PullRequestInfo {
    pub fn has_label(&self, label: PrLabel) -> bool {
        self.labels.contains(&label)
    }
}

/// Commit in the release range together with its pull request, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommit {
    pub sha: String,
    pub author_name: String,
    pub message: String,
    pub pull_request: Option<PullRequestInfo>,
}

impl ResolvedCommit {
    pub fn author_login(&self) -> Option<&str> {
        self.pull_request
            .as_ref()
            .and_then(|pr| pr.author_login.as_deref())
    }

    /// Subject line of the commit message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or("").trim()
    }

    /// Markdown bullet for this commit
    ///
    /// - with a pull request: `* {title} (#{number}) via {author} (@{login})`
    /// - without one: `* {subject} via {author}`
    pub fn changelog_line(&self) -> String {
        match &self.pull_request {
            Some(pr) => {
                let mut line = format!("* {} (#{}) via {}", pr.title, pr.number, self.author_name);
                if let Some(login) = &pr.author_login {
                    line.push_str(&format!(" (@{})", login));
                }
                line
            }
            None => format!("* {} via {}", self.summary(), self.author_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(pull_request: Option<PullRequestInfo>) -> ResolvedCommit {
        ResolvedCommit {
            sha: "a1b2c3d4".to_string(),
            author_name: "Jane Doe".to_string(),
            message: "Fix crash on launch\n\nLonger body text".to_string(),
            pull_request,
        }
    }

    #[test]
    fn test_line_with_pull_request() {
        let pr = PullRequestInfo {
            number: 42,
            title: "Fix crash on launch".to_string(),
            labels: BTreeSet::from([PrLabel::Fix]),
            author_login: Some("janedoe".to_string()),
        };
        assert_eq!(
            commit(Some(pr)).changelog_line(),
            "* Fix crash on launch (#42) via Jane Doe (@janedoe)"
        );
    }

    #[test]
    fn test_line_without_login() {
        let pr = PullRequestInfo {
            number: 7,
            title: "Bump deps".to_string(),
            labels: BTreeSet::new(),
            author_login: None,
        };
        let resolved = commit(Some(pr));
        assert_eq!(resolved.changelog_line(), "* Bump deps (#7) via Jane Doe");
        assert_eq!(resolved.author_login(), None);
    }

    #[test]
    fn test_fallback_line_uses_subject() {
        assert_eq!(
            commit(None).changelog_line(),
            "* Fix crash on launch via Jane Doe"
        );
    }

    #[test]
    fn test_summary_of_empty_message() {
        let mut resolved = commit(None);
        resolved.message = String::new();
        assert_eq!(resolved.summary(), "");
    }
}
