//! # Bitbucket HTTP Client
//!
//! HTTP client implementation for the Bitbucket 2.0 API, handling
//! authentication and cursor pagination for the repository listing the
//! clone orchestrator consumes.

use anyhow::{Context, Result};
use cloner_core::RepoDescriptor;
use reqwest::{Client, StatusCode};
use tracing::instrument;

use crate::consts;
use crate::models::{BitbucketAuth, BitbucketPage};

/// Represents a Bitbucket API client
pub struct BitbucketClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: BitbucketAuth,
}

impl BitbucketClient {
  /// Create a new Bitbucket client
  pub fn new(auth: BitbucketAuth) -> Self {
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

  /// List every repository in the authenticated user's workspace, sorted
  /// by name ascending.
  ///
  /// Walks `GET /2.0/repositories/{workspace}` following each page's
  /// `next` cursor until the listing is exhausted.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_repos(&self) -> Result<Vec<RepoDescriptor>> {
    let mut url = format!(
      "{}/2.0/repositories/{}?pagelen={}",
      self.base_url,
      self.auth.username,
      consts::PAGE_LEN
    );
    let mut repos = Vec::new();

    loop {
      let response = self
        .client
        .get(&url)
        .header("User-Agent", consts::USER_AGENT)
        .basic_auth(&self.auth.username, Some(&self.auth.password))
        .send()
        .await
        .context("Failed to list Bitbucket repositories")?;

      match response.status() {
        StatusCode::OK => {
          let page: BitbucketPage = response
            .json()
            .await
            .context("Failed to parse Bitbucket repository listing")?;

          repos.extend(page.values.into_iter().map(|repo| {
            let clone_url = repo.ssh_url(&self.auth.username);
            RepoDescriptor::new(repo.name, clone_url)
          }));

          match page.next {
            Some(next) => url = next,
            None => break,
          }
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
          return Err(anyhow::anyhow!(
            "Authentication failed. Please check your Bitbucket credentials."
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

    // Sorted so the clone order (and with it, the console output) is
    // deterministic regardless of listing order
    repos.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(repos)
  }
}

/// Create a Bitbucket client from credentials
pub fn create_bitbucket_client(username: &str, password: &str) -> BitbucketClient {
  BitbucketClient::new(BitbucketAuth {
    username: username.to_string(),
    password: password.to_string(),
  })
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{basic_auth, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  fn repo_json(name: &str, slug: &str) -> serde_json::Value {
    json!({ "name": name, "slug": slug })
  }

  #[tokio::test]
  async fn test_bitbucket_client_creation() {
    let client = create_bitbucket_client("bucketeer", "test_password");

    assert_eq!(client.base_url, consts::API_BASE_URL);
    assert_eq!(client.auth.username, "bucketeer");
    assert_eq!(client.auth.password, "test_password");
  }

  #[tokio::test]
  async fn test_list_repos_sorts_by_name() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_bitbucket_client("bucketeer", "test_password").with_base_url(mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/2.0/repositories/bucketeer"))
      .and(basic_auth("bucketeer", "test_password"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "values": [
              repo_json("zebra", "zebra"),
              repo_json("apple", "apple"),
              repo_json("mango", "mango"),
          ],
      })))
      .mount(&mock_server)
      .await;

    let repos = client.list_repos().await?;

    let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["apple", "mango", "zebra"]);
    assert_eq!(repos[0].clone_url, "git@bitbucket.org:bucketeer/apple.git");

    Ok(())
  }

  #[tokio::test]
  async fn test_list_repos_follows_next_cursor() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_bitbucket_client("bucketeer", "test_password").with_base_url(mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/2.0/repositories/bucketeer"))
      .and(query_param("pagelen", consts::PAGE_LEN.to_string()))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "values": [repo_json("first", "first")],
          "next": format!("{}/2.0/repositories/bucketeer?page=2", mock_server.uri()),
      })))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/2.0/repositories/bucketeer"))
      .and(query_param("page", "2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "values": [repo_json("second", "second")],
      })))
      .mount(&mock_server)
      .await;

    let repos = client.list_repos().await?;

    assert_eq!(repos.len(), 2);

    Ok(())
  }

  #[tokio::test]
  async fn test_list_repos_unauthorized() {
    let mock_server = MockServer::start().await;
    let client = create_bitbucket_client("bucketeer", "bad_password").with_base_url(mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/2.0/repositories/bucketeer"))
      .respond_with(ResponseTemplate::new(401).set_body_json(json!({
          "type": "error",
          "error": {"message": "Invalid credentials"}
      })))
      .mount(&mock_server)
      .await;

    let result = client.list_repos().await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Authentication failed"));
  }
}
