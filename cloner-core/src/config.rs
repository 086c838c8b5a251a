//! # Configuration
//!
//! Resolves the home-relative file locations the tool depends on: the
//! credential store and the SSH identity used for clone transport. A
//! missing home directory is a fatal configuration error since no store
//! location can be determined without it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::BaseDirs;

/// Name of the credential file in the user's home directory
pub const CREDENTIALS_FILE: &str = ".clonerrc";

/// Get the path to the credential file (`~/.clonerrc`)
pub fn credentials_path() -> Result<PathBuf> {
  Ok(home_dir()?.join(CREDENTIALS_FILE))
}

/// Get the path to the SSH identity file used for clone transport
/// (`~/.ssh/id_rsa`)
pub fn ssh_identity_path() -> Result<PathBuf> {
  Ok(home_dir()?.join(".ssh").join("id_rsa"))
}

fn home_dir() -> Result<PathBuf> {
  let base_dirs = BaseDirs::new().context("Could not determine home directory")?;
  Ok(base_dirs.home_dir().to_path_buf())
}
