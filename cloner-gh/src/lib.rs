//! # GitHub Listing Adapter
//!
//! Lists the repositories owned by the authenticated user via the GitHub
//! REST API and maps them into the repository descriptors the clone
//! orchestrator consumes.

pub mod client;
pub mod consts;
pub mod models;

// Re-export the client
pub use client::{GitHubClient, create_github_client};
// Re-export models
pub use models::{GitHubAuth, GitHubRepo};
