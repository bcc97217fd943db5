use crate::analyzer::ResolverSettings;
use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variables checked for a GitHub token, in order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Represents the complete configuration for sdk-release.
///
/// Names the repository being released, the branch its pull requests target
/// and how the GitHub API is paced.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// GitHub repository, "owner/name"
    #[serde(default)]
    pub repo_name: String,

    /// Branch pull requests must target; the checked-out branch when unset
    #[serde(default)]
    pub base_branch: Option<String>,

    /// Seconds to wait before each pull request search
    #[serde(default)]
    pub rate_limit_delay_secs: f64,

    /// Whether pre-release tags can be the reference tag
    #[serde(default)]
    pub include_prereleases: bool,

    #[serde(default)]
    pub hybrid_common: HybridCommonConfig,
}

fn default_hybrid_common_repo() -> String {
    "RevenueCat/purchases-hybrid-common".to_string()
}

fn default_versions_file() -> String {
    "VERSIONS.md".to_string()
}

fn default_ios_repo() -> String {
    "RevenueCat/purchases-ios".to_string()
}

fn default_android_repo() -> String {
    "RevenueCat/purchases-android".to_string()
}

/// Where native SDK versions and releases are looked up.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct HybridCommonConfig {
    #[serde(default = "default_hybrid_common_repo")]
    pub repo: String,

    /// Versions table path, in the hybrid library and in the local checkout
    #[serde(default = "default_versions_file")]
    pub versions_file: String,

    #[serde(default = "default_ios_repo")]
    pub ios_repo: String,

    #[serde(default = "default_android_repo")]
    pub android_repo: String,
}

impl Default for HybridCommonConfig {
    fn default() -> Self {
        HybridCommonConfig {
            repo: default_hybrid_common_repo(),
            versions_file: default_versions_file(),
            ios_repo: default_ios_repo(),
            android_repo: default_android_repo(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            repo_name: String::new(),
            base_branch: None,
            rate_limit_delay_secs: 0.0,
            include_prereleases: false,
            hybrid_common: HybridCommonConfig::default(),
        }
    }
}

impl Config {
    /// Delay before each pull request search
    ///
    /// Negative, infinite or NaN values are rejected.
    pub fn rate_limit_delay(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.rate_limit_delay_secs).map_err(|err| {
            ReleaseError::config(format!(
                "rate_limit_delay_secs = {}: {}",
                self.rate_limit_delay_secs, err
            ))
        })
    }

    /// Settings for commit resolution against `base_branch`
    ///
    /// Fails when no repository name is configured.
    pub fn resolver_settings(&self, base_branch: &str) -> Result<ResolverSettings> {
        if self.repo_name.trim().is_empty() {
            return Err(ReleaseError::config("repo_name is not set"));
        }
        Ok(ResolverSettings::new(&self.repo_name, base_branch)
            .with_rate_limit_delay(self.rate_limit_delay()?))
    }
}

/// GitHub token from the environment, if any
pub fn github_token() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|token| token.trim().to_string())
        .find(|token| !token.is_empty())
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in current directory
/// 3. `sdk-release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./release.toml").exists() {
        fs::read_to_string("./release.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("sdk-release.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
