// tests/config_test.rs
use sdk_release::config::{github_token, load_config, Config};
use sdk_release::ReleaseError;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.repo_name, "");
    assert_eq!(config.base_branch, None);
    assert!(!config.include_prereleases);
    assert_eq!(config.rate_limit_delay().unwrap(), Duration::ZERO);
    assert_eq!(config.hybrid_common.repo, "RevenueCat/purchases-hybrid-common");
    assert_eq!(config.hybrid_common.ios_repo, "RevenueCat/purchases-ios");
    assert_eq!(config.hybrid_common.android_repo, "RevenueCat/purchases-android");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
repo_name = "RevenueCat/purchases-unity"
rate_limit_delay_secs = 0.5
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.repo_name, "RevenueCat/purchases-unity");
    assert_eq!(config.rate_limit_delay().unwrap(), Duration::from_millis(500));
    assert_eq!(config.hybrid_common.versions_file, "VERSIONS.md");
}

#[test]
fn test_load_fixture() {
    let config =
        load_config(Some("tests/fixtures/release.toml")).expect("Failed to load test config");
    assert_eq!(config.repo_name, "RevenueCat/purchases-capacitor");
    assert_eq!(config.base_branch.as_deref(), Some("main"));
    assert!(config.include_prereleases);

    let settings = config.resolver_settings("main").unwrap();
    assert_eq!(settings.rate_limit_delay, Duration::from_secs(1));
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"repo_name = [").unwrap();
    temp_file.flush().unwrap();

    let result = load_config(Some(temp_file.path().to_str().unwrap()));
    assert!(matches!(result, Err(ReleaseError::Toml(_))));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let result = load_config(Some("/nonexistent/release.toml"));
    assert!(matches!(result, Err(ReleaseError::Io(_))));
}

#[test]
#[serial]
fn test_github_token_prefers_github_token() {
    env::set_var("GITHUB_TOKEN", "primary");
    env::set_var("GH_TOKEN", "secondary");
    assert_eq!(github_token().as_deref(), Some("primary"));

    env::remove_var("GITHUB_TOKEN");
    assert_eq!(github_token().as_deref(), Some("secondary"));

    env::remove_var("GH_TOKEN");
    assert_eq!(github_token(), None);
}

#[test]
#[serial]
fn test_blank_github_token_is_ignored() {
    env::set_var("GITHUB_TOKEN", "  ");
    env::remove_var("GH_TOKEN");
    assert_eq!(github_token(), None);
    env::remove_var("GITHUB_TOKEN");
}
