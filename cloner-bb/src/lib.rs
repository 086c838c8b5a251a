//! # Bitbucket Listing Adapter
//!
//! Lists the repositories in the authenticated user's workspace via the
//! Bitbucket 2.0 API and maps them into the repository descriptors the
//! clone orchestrator consumes. Results are sorted by name so the clone
//! order is deterministic.

pub mod client;
pub mod consts;
pub mod models;

// Re-export the client
pub use client::{BitbucketClient, create_bitbucket_client};
// Re-export models
pub use models::{BitbucketAuth, BitbucketRepo};
