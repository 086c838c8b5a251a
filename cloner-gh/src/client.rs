//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling
//! authentication, pagination, and response parsing for the repository
//! listing the clone orchestrator consumes.

use anyhow::{Context, Result};
use cloner_core::RepoDescriptor;
use reqwest::{Client, StatusCode};
use tracing::instrument;

use crate::consts;
use crate::models::{GitHubAuth, GitHubRepo};

/// Represents a GitHub API client
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: GitHubAuth,
}

impl GitHubClient {
  /// Create a new GitHub client
  pub fn new(auth: GitHubAuth) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: consts::API_BASE_URL.to_string(),
      auth,
    }
  }

  /// Override the API base URL (used by tests against a mock server)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// List every repository owned by the authenticated user.
  ///
  /// Walks `GET /user/repos` a page at a time until a short page signals
  /// the end of the listing. Order is whatever the API returns.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_repos(&self) -> Result<Vec<RepoDescriptor>> {
    let url = format!("{}/user/repos", self.base_url);
    let mut repos = Vec::new();
    let mut page: usize = 1;

    loop {
      let response = self
        .client
        .get(&url)
        .query(&[("per_page", consts::PER_PAGE.to_string()), ("page", page.to_string())])
        .header("Accept", consts::ACCEPT)
        .header("User-Agent", consts::USER_AGENT)
        .basic_auth(&self.auth.username, Some(&self.auth.password))
        .send()
        .await
        .context("Failed to list GitHub repositories")?;

      match response.status() {
        StatusCode::OK => {
          let batch: Vec<GitHubRepo> = response
            .json()
            .await
            .context("Failed to parse GitHub repository listing")?;

          let short_page = batch.len() < consts::PER_PAGE;
          repos.extend(batch.into_iter().map(RepoDescriptor::from));

          if short_page {
            return Ok(repos);
          }
          page += 1;
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
          return Err(anyhow::anyhow!(
            "Authentication failed. Please check your GitHub credentials."
          ));
        }
        status => {
          return Err(anyhow::anyhow!(
            "Unexpected error: HTTP {} - {}",
            status,
            response.text().await.unwrap_or_default()
          ));
        }
      }
    }
  }
}

/// Create a GitHub client from credentials
pub fn create_github_client(username: &str, password: &str) -> GitHubClient {
  GitHubClient::new(GitHubAuth {
    username: username.to_string(),
    password: password.to_string(),
  })
}
