use crate::freshness_audit::domain::{AccessToken, Dependency, TimestampResult};
use crate::ports::outbound::RemoteHistory;
use crate::shared::error::TimestampError;
use crate::shared::Result;
use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Only the default branch is ever consulted
const DEFAULT_BRANCH: &str = "master";

#[derive(Debug, Deserialize)]
struct BranchInfo {
    commit: BranchCommit,
}

#[derive(Debug, Deserialize)]
struct BranchCommit {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    committer: Committer,
}

#[derive(Debug, Deserialize)]
struct Committer {
    date: String,
}

/// Extracts `commit.commit.committer.date` from a branch response body
pub fn parse_branch_date(body: &str) -> TimestampResult {
    let branch: BranchInfo = serde_json::from_str(body).map_err(|e| TimestampError::RemoteParse {
        details: e.to_string(),
    })?;

    let date = branch.commit.commit.committer.date;
    DateTime::parse_from_rfc3339(&date)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| TimestampError::RemoteDateFormat { value: date })
}

/// GitHubBranchClient adapter for the GitHub branches API
///
/// One blocking client is built up front and reused for every request.
/// Requests are never retried; a failure is final for that dependency.
pub struct GitHubBranchClient {
    client: Client,
    api_url: String,
}

impl GitHubBranchClient {
    pub const API_ENDPOINT: &'static str = "https://api.github.com";
    pub const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a client for the public GitHub API with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_config(Self::API_ENDPOINT, Duration::from_secs(Self::TIMEOUT_SECONDS))
    }

    /// Creates a client against `api_url` (e.g. a GitHub Enterprise API root)
    pub fn with_config(api_url: &str, timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("depfresh/{}", version);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Builds the branch endpoint URL for a dependency
    pub fn branch_url(&self, dependency: &Dependency, token: &AccessToken) -> String {
        format!(
            "{}/repos/{}/{}/branches/{}?access_token={}",
            self.api_url,
            urlencoding::encode(dependency.account()),
            urlencoding::encode(dependency.repository()),
            DEFAULT_BRANCH,
            urlencoding::encode(token.as_str())
        )
    }
}

impl RemoteHistory for GitHubBranchClient {
    fn last_change(&self, dependency: &Dependency, token: &AccessToken) -> TimestampResult {
        let url = self.branch_url(dependency, token);

        let mut request = self
            .client
            .get(&url)
            .header("Time-Zone", "UTC")
            .header("Accept", "application/vnd.github+json");
        if !token.is_anonymous() {
            request = request.header("Authorization", format!("token {}", token.as_str()));
        }

        // without_url keeps the token out of error messages
        let response = request.send().map_err(|e| TimestampError::RemoteTransport {
            details: e.without_url().to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TimestampError::RemoteNotFound {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| TimestampError::RemoteTransport {
            details: e.without_url().to_string(),
        })?;

        parse_branch_date(&body)
    }
}
