//! Constants for the cloner CLI

/// Services credentials are collected for, in prompt order
pub const SERVICES: &[&str] = &["bitbucket", "github"];

/// Branch requested from every clone
pub const DEFAULT_BRANCH: &str = "master";
