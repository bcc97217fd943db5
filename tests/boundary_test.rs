use sdk_release::boundary::BoundaryWarning;
use sdk_release::domain::{detect_bump_type, BumpType, Tag};

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_no_pull_request_display() {
    let warning = BoundaryWarning::NoPullRequest {
        sha: "abc1234def5678".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("No pull request"),
        "Message should contain 'No pull request', got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("abc1234") && !display_msg.contains("abc1234d"),
        "Message should contain shortened commit hash 'abc1234', got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_unparsable_tag_display() {
    let warning = BoundaryWarning::UnparsableTag {
        tag: "v1.2.3".to_string(),
        reason: "Invalid format".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Cannot parse tag"),
        "Message should contain 'Cannot parse tag', got: {}",
        display_msg
    );
    assert!(display_msg.contains("v1.2.3"));
}

#[test]
fn test_boundary_warning_malformed_versions_row_display() {
    let warning = BoundaryWarning::MalformedVersionsRow {
        source: "VERSIONS.md".to_string(),
        reason: "missing row 3".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("VERSIONS.md"));
    assert!(display_msg.contains("missing row 3"));
}

#[test]
fn test_boundary_warning_native_releases_unavailable_display() {
    let warning = BoundaryWarning::NativeReleasesUnavailable {
        repo: "RevenueCat/purchases-ios".to_string(),
        reason: "HTTP 403".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("RevenueCat/purchases-ios"));
    assert!(display_msg.contains("HTTP 403"));
}

#[test]
fn test_boundary_warning_short_sha_is_char_safe() {
    let warning = BoundaryWarning::NoPullRequest {
        sha: "ééééééééé".to_string(),
    };
    assert!(warning.to_string().contains("No pull request"));

    let warning = BoundaryWarning::NoPullRequest {
        sha: "abc".to_string(),
    };
    assert!(warning.to_string().contains("commit abc;"));
}

// ============================================================================
// Degraded paths
// ============================================================================

#[test]
fn test_unparsable_tags_are_skipped() {
    let latest = Tag::latest(["v2.0.0", "release-3", "1.4.0", "1.10.0"], false).unwrap();
    assert_eq!(latest.name, "1.10.0");
}

#[test]
fn test_no_parsable_tag() {
    assert!(Tag::latest(["v1.0.0", "latest"], true).is_none());
}

#[test]
fn test_incomparable_versions_give_no_bump() {
    assert_eq!(detect_bump_type("1.2", "2.0.0"), BumpType::None);
    assert_eq!(detect_bump_type("abc", "1.0.0"), BumpType::None);
}
