//! # Clone Operation
//!
//! Clones a single repository over SSH into a target directory derived from
//! the clone URL's trailing path segment. An existing target short-circuits
//! with a skip; transport failures are captured in the outcome so the
//! batch keeps going.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use git2::build::RepoBuilder;
use git2::{Cred, FetchOptions, RemoteCallbacks};
use regex::Regex;
use thiserror::Error;
use tracing::debug;

/// Errors that end a single clone before the transport is invoked
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CloneError {
  #[error("clone URL '{0}' does not match '<anything>/<name>.git'")]
  MalformedUrl(String),
}

/// Transport configuration shared by every clone in a run
#[derive(Debug, Clone)]
pub struct CloneOptions {
  /// SSH identity file offered to the remote
  pub identity_file: PathBuf,
  /// Branch requested from the remote
  pub branch: String,
}

/// Terminal state of one clone attempt
#[derive(Debug)]
pub enum CloneOutcome {
  /// Repository was fetched into the target directory
  Cloned,
  /// Target directory already exists; nothing was invoked
  Skipped,
  /// The underlying transport failed; the error carries libgit2's text
  Failed(git2::Error),
}

static SLUG_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r".*/([^/]+)\.git$").expect("Failed to compile slug regex"));

/// Parse the repository slug from a clone URL's trailing path segment.
///
/// `git@host:owner/myrepo.git` and `https://host/owner/myrepo.git` both
/// yield `myrepo`.
pub fn repo_slug(url: &str) -> Result<&str, CloneError> {
  SLUG_PATTERN
    .captures(url)
    .and_then(|captures| captures.get(1))
    .map(|slug| slug.as_str())
    .ok_or_else(|| CloneError::MalformedUrl(url.to_string()))
}

/// Clone `url` into `<base_dir>/<slug>`.
pub fn clone_repo(url: &str, base_dir: &Path, opts: &CloneOptions) -> Result<CloneOutcome, CloneError> {
  let slug = repo_slug(url)?;
  Ok(clone_into(url, &base_dir.join(slug), opts))
}

/// Clone `url` into an explicit target directory.
///
/// The caller has already derived the target from the slug; this only
/// performs the existence short-circuit and the transfer itself.
pub fn clone_into(url: &str, target: &Path, opts: &CloneOptions) -> CloneOutcome {
  if target.exists() {
    debug!("Target {} already exists, skipping clone", target.display());
    return CloneOutcome::Skipped;
  }

  let mut callbacks = RemoteCallbacks::new();
  let identity_file = opts.identity_file.clone();
  callbacks.credentials(move |_url, username_from_url, _allowed_types| {
    Cred::ssh_key(username_from_url.unwrap_or("git"), None, &identity_file, None)
  });

  let mut fetch_options = FetchOptions::new();
  fetch_options.remote_callbacks(callbacks);

  let mut builder = RepoBuilder::new();
  builder.branch(&opts.branch);
  builder.fetch_options(fetch_options);

  match builder.clone(url, target) {
    Ok(_) => CloneOutcome::Cloned,
    Err(e) => CloneOutcome::Failed(e),
  }
}
