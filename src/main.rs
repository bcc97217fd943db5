use std::fs;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sdk_release::analyzer::{ChangelogBuilder, CommitResolver, NativeReleaseLinker, VersionAnalyzer};
use sdk_release::config::{self, Config};
use sdk_release::domain::{detect_bump_type, increment_version, BumpType};
use sdk_release::git::{Git2Repository, Repository};
use sdk_release::github::GitHubClient;
use sdk_release::ui;

#[derive(Parser)]
#[command(
    name = "sdk-release",
    version,
    about = "Generate changelogs and next versions from merged pull request labels"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long = "repo", global = true, help = "GitHub repository (owner/name)")]
    repo_name: Option<String>,

    #[arg(long, global = true, help = "Branch pull requests must target")]
    base_branch: Option<String>,

    #[arg(long, global = true, help = "Seconds to wait before each pull request search")]
    rate_limit_delay: Option<f64>,

    #[arg(long, global = true, help = "Allow a pre-release tag as the reference tag")]
    include_prereleases: bool,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the changelog for commits since the latest release
    Changelog {
        #[arg(long, help = "Hybrid common version this release moves to")]
        hybrid_common_version: Option<String>,

        #[arg(short, long, help = "Write the changelog to a file instead of stdout")]
        output: Option<String>,
    },
    /// Compute the next version from merged pull request labels
    NextVersion {
        #[arg(long, help = "Build metadata appended when a release is needed")]
        build_metadata: Option<String>,
    },
    /// Classify the change between two versions
    DetectBump { from: String, to: String },
    /// Increment a version by a bump type
    Increment {
        #[arg(value_name = "VERSION")]
        current: String,
        bump: BumpType,

        #[arg(long, help = "Append the -SNAPSHOT suffix")]
        snapshot: bool,
    },
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        ui::display_error(&format!("{:#}", err));
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    match &args.command {
        Command::DetectBump { from, to } => {
            println!("{}", detect_bump_type(from, to));
            Ok(())
        }
        Command::Increment {
            current,
            bump,
            snapshot,
        } => {
            println!("{}", increment_version(current, *bump, *snapshot)?);
            Ok(())
        }
        Command::Changelog {
            hybrid_common_version,
            output,
        } => {
            let config = resolve_config(&args)?;
            let repo = Git2Repository::open(".").context("Failed to open git repository")?;
            let github = GitHubClient::new(config::github_token())?;
            let settings = config.resolver_settings(&base_branch(&config, &repo)?)?;

            let linker = NativeReleaseLinker::new(
                &github,
                config.hybrid_common.clone(),
                &config.hybrid_common.versions_file,
                hybrid_common_version.clone(),
            );
            let changelog = ChangelogBuilder::new(
                CommitResolver::new(&repo, &github, settings),
                config.include_prereleases,
            )
            .with_native_links(linker)
            .build()?;

            match output {
                Some(path) => {
                    fs::write(path, &changelog)
                        .with_context(|| format!("Failed to write changelog to {}", path))?;
                    ui::display_success(&format!("Changelog written to {}", path));
                }
                None => println!("{}", changelog),
            }
            Ok(())
        }
        Command::NextVersion { build_metadata } => {
            let config = resolve_config(&args)?;
            let repo = Git2Repository::open(".").context("Failed to open git repository")?;
            let github = GitHubClient::new(config::github_token())?;
            let settings = config.resolver_settings(&base_branch(&config, &repo)?)?;

            let mut analyzer = VersionAnalyzer::new(
                CommitResolver::new(&repo, &github, settings),
                config.include_prereleases,
            );
            if let Some(metadata) = build_metadata {
                analyzer = analyzer.with_build_metadata(metadata.as_str());
            }

            let next = analyzer.determine_next_version()?;
            if !next.is_release_needed() {
                ui::display_status(&format!(
                    "No release needed since {}",
                    next.previous.name
                ));
            }
            println!("{}", ui::format_next_version(&next));
            Ok(())
        }
    }
}

/// Configuration file values with command line overrides applied
fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    if let Some(repo_name) = &args.repo_name {
        config.repo_name = repo_name.clone();
    }
    if let Some(base_branch) = &args.base_branch {
        config.base_branch = Some(base_branch.clone());
    }
    if let Some(delay) = args.rate_limit_delay {
        config.rate_limit_delay_secs = delay;
    }
    if args.include_prereleases {
        config.include_prereleases = true;
    }
    Ok(config)
}

fn base_branch<R: Repository>(config: &Config, repo: &R) -> Result<String> {
    match &config.base_branch {
        Some(branch) => Ok(branch.clone()),
        None => repo
            .current_branch()
            .context("No base branch configured and HEAD is not on a branch"),
    }
}
