use crate::error::{ReleaseError, Result};
use crate::github::{GitHubApi, PullRequestItem, ReleaseInfo};
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use tracing::debug;

const API_BASE: &str = "https://api.github.com";
const RAW_BASE: &str = "https://raw.githubusercontent.com";
const RELEASES_PER_PAGE: usize = 100;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    number: u64,
    title: String,
    #[serde(default)]
    labels: Vec<LabelPayload>,
    user: Option<UserPayload>,
}

#[derive(Debug, Deserialize)]
struct LabelPayload {
    name: String,
}

#[derive(Debug, Deserialize)]
struct UserPayload {
    login: String,
}

#[derive(Debug, Deserialize)]
struct ReleasePayload {
    tag_name: String,
    name: Option<String>,
    html_url: String,
    #[serde(default)]
    prerelease: bool,
}

impl From<SearchItem> for PullRequestItem {
    fn from(item: SearchItem) -> Self {
        PullRequestItem {
            number: item.number,
            title: item.title,
            labels: item.labels.into_iter().map(|l| l.name).collect(),
            author_login: item.user.map(|u| u.login),
        }
    }
}

impl From<ReleasePayload> for ReleaseInfo {
    fn from(release: ReleasePayload) -> Self {
        ReleaseInfo {
            tag_name: release.tag_name,
            name: release.name,
            html_url: release.html_url,
            prerelease: release.prerelease,
        }
    }
}

/// Blocking GitHub REST client
pub struct GitHubClient {
    client: Client,
    token: Option<String>,
    api_base: String,
    raw_base: String,
}

impl GitHubClient {
    /// Create a client, authenticated when a token is given
    pub fn new(token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sdk-release/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(GitHubClient {
            client,
            token,
            api_base: API_BASE.to_string(),
            raw_base: RAW_BASE.to_string(),
        })
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json");
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    fn send(&self, request: RequestBuilder, what: &str) -> Result<reqwest::blocking::Response> {
        let response = request.send()?;
        if !response.status().is_success() {
            return Err(ReleaseError::github(format!(
                "{} failed (HTTP {})",
                what,
                response.status()
            )));
        }
        Ok(response)
    }
}

impl GitHubApi for GitHubClient {
    fn search_pull_requests(
        &self,
        repo: &str,
        sha: &str,
        base_branch: &str,
    ) -> Result<Vec<PullRequestItem>> {
        let url = format!("{}/search/issues", self.api_base);
        let query = search_query(repo, sha, base_branch);
        debug!(%query, "searching pull requests");

        let request = self.get(&url).query(&[("q", query.as_str())]);
        let response: SearchResponse = self
            .send(request, &format!("Pull request search for {}", sha))?
            .json()?;

        Ok(response.items.into_iter().map(PullRequestItem::from).collect())
    }

    fn list_releases(&self, repo: &str) -> Result<Vec<ReleaseInfo>> {
        let url = format!("{}/repos/{}/releases", self.api_base, repo);
        let mut releases = Vec::new();
        let mut page = 1usize;

        loop {
            let per_page = RELEASES_PER_PAGE.to_string();
            let page_str = page.to_string();
            let request = self
                .get(&url)
                .query(&[("per_page", per_page.as_str()), ("page", page_str.as_str())]);
            let batch: Vec<ReleasePayload> = self
                .send(request, &format!("Listing releases of {}", repo))?
                .json()?;

            debug!(repo, page, count = batch.len(), "fetched releases page");
            if batch.is_empty() {
                break;
            }
            let last_page = batch.len() < RELEASES_PER_PAGE;
            releases.extend(batch.into_iter().map(ReleaseInfo::from));
            if last_page {
                break;
            }
            page += 1;
        }

        Ok(releases)
    }

    fn fetch_file(&self, repo: &str, git_ref: &str, path: &str) -> Result<String> {
        let url = format!("{}/{}/{}/{}", self.raw_base, repo, git_ref, path);
        debug!(%url, "fetching file");

        let text = self
            .send(self.get(&url), &format!("Fetching {} at {}", path, git_ref))?
            .text()?;
        Ok(text)
    }
}

fn search_query(repo: &str, sha: &str, base_branch: &str) -> String {
    format!("repo:{} is:pr base:{} SHA:{}", repo, base_branch, sha)
}
