use cloner_core::RepoDescriptor;
use serde::Deserialize;

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub username: String,
  pub password: String,
}

/// Represents a repository as returned by `GET /user/repos`
#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
  pub name: String,
  pub ssh_url: String,
}

impl From<GitHubRepo> for RepoDescriptor {
  fn from(repo: GitHubRepo) -> Self {
    RepoDescriptor::new(repo.name, repo.ssh_url)
  }
}
