//! Hosting-API infrastructure adapter.
//!
//! Implements the [`gate::CommitHost`] port over the GitHub REST API.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. All API
//! details (authentication headers, pagination parameters, response shapes)
//! are handled here; the [`gate`] crate never sees them.
//!
//! The credential is an explicit constructor input. Each client speaks for
//! exactly one token; validating a different user means constructing a
//! different client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use gate::{CommitHost, HostError, Login, RepositoryName};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for [`GithubClient`].
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// API root (default: `https://api.github.com`).
    pub base_url: String,
    /// Personal access token the client authenticates with.
    pub token: String,
    /// Timeout applied to every request (default: 30 seconds).
    pub request_timeout: Duration,
    /// User agent sent on every request; GitHub rejects requests without one.
    pub user_agent: String,
}

impl GithubConfig {
    /// Configuration for the public API with the given token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            token: token.into(),
            request_timeout: Duration::from_secs(30),
            user_agent: "gate-reputation/0.1".to_string(),
        }
    }

    /// Points the client at a different API root, for tests and GitHub
    /// Enterprise installations.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// REST client for the GitHub API.
pub struct GithubClient {
    config: GithubConfig,
    http: Client,
}

impl GithubClient {
    /// Creates a client for the given configuration.
    pub fn new(config: GithubConfig) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_default();

        Self { config, http }
    }

    /// Issues an authenticated GET and checks the status.
    async fn get(&self, url: String) -> Result<reqwest::Response, HostError> {
        debug!(url = %url, "hosting API request");

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.config.token))
            .send()
            .await
            .map_err(|e| HostError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HostError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl CommitHost for GithubClient {
    async fn authenticated_login(&self) -> Result<Login, HostError> {
        let response = self.get(format!("{}/user", self.config.base_url)).await?;

        let user: WireUser = response
            .json()
            .await
            .map_err(|e| HostError::Malformed(e.to_string()))?;

        Login::new(user.login).ok_or_else(|| HostError::Malformed("empty login".to_string()))
    }

    async fn commits_page(
        &self,
        login: &Login,
        repository: &RepositoryName,
        page: u32,
        per_page: u32,
    ) -> Result<usize, HostError> {
        let url = format!(
            "{}/repos/{}/{}/commits?author={}&per_page={}&page={}",
            self.config.base_url,
            login.as_str(),
            repository.as_str(),
            login.as_str(),
            per_page,
            page,
        );

        let response = self.get(url).await?;

        // Commit contents are opaque; only the page length matters.
        let commits: Vec<Value> = response
            .json()
            .await
            .map_err(|e| HostError::Malformed(e.to_string()))?;

        Ok(commits.len())
    }
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct WireUser {
    login: String,
}
