//! Formatting functions for UI output.

use crate::analyzer::NextVersion;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Plain two-line rendering of a next-version result: version, then bump.
///
/// # Examples
/// ```ignore
/// 4.3.0
/// minor
/// ```
pub fn format_next_version(next: &NextVersion) -> String {
    format!("{}\n{}", next.version, next.bump)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BumpType, Tag};

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_status() {
        display_status("test status");
    }

    #[test]
    fn test_format_next_version() {
        let next = NextVersion {
            previous: Tag::parse("4.2.0").unwrap(),
            version: "4.3.0".to_string(),
            bump: BumpType::Minor,
        };
        assert_eq!(format_next_version(&next), "4.3.0\nminor");
    }
}
