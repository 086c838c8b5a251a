//! # Cloner Core Library
//!
//! Core library for the cloner tool providing the nested credential store,
//! file-location configuration, the repository descriptor shared between
//! provider adapters, and output utilities for status reporting.

pub mod config;
pub mod output;
pub mod prompts;
pub mod repo;
pub mod store;

// Re-export main types for the CLI and provider adapters
pub use config::{credentials_path, ssh_identity_path};
pub use output::{ColorMode, CloneStatus, print_error, print_info, print_success, print_warning};
pub use prompts::cloner_theme;
pub use repo::{RepoDescriptor, matches_filter};
pub use store::{CredentialStore, Node, StoreError};
