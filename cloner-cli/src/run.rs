//! # Clone Orchestration
//!
//! Drives a full run: credential bootstrap, destination prompt, provider
//! listings, and the sequential clone loop with per-repository status
//! reporting. Per-repository failures never abort the batch; credential
//! and listing failures do.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cloner_bb::create_bitbucket_client;
use cloner_core::output::{self, CloneStatus};
use cloner_core::{CredentialStore, RepoDescriptor, cloner_theme, config, matches_filter, print_error};
use cloner_gh::create_github_client;
use dialoguer::Input;
use tokio::runtime::Runtime;
use tracing::info;

use crate::clone::{self, CloneOptions, CloneOutcome};
use crate::consts;
use crate::creds;

/// Counters for one provider's pass over its repository list
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
  pub cloned: usize,
  pub skipped: usize,
  pub failed: usize,
}

/// Run the full clone batch across both providers.
///
/// `filter` restricts clones to URLs containing it (case-insensitive; the
/// empty string matches everything).
pub fn run(filter: &str) -> Result<()> {
  let credentials_path = config::credentials_path()?;
  let mut store = CredentialStore::load(&credentials_path);
  creds::ensure_credentials(&mut store, consts::SERVICES, &credentials_path)?;

  let destination: String = Input::with_theme(&cloner_theme())
    .with_prompt("Destination directory")
    .interact_text()
    .context("Failed to read destination directory")?;
  let base_dir = PathBuf::from(destination);

  let opts = CloneOptions {
    identity_file: config::ssh_identity_path()?,
    branch: consts::DEFAULT_BRANCH.to_string(),
  };

  let rt = Runtime::new().context("Failed to create async runtime")?;

  let github = creds::service_credentials(&store, "github")?;
  let github_repos = rt
    .block_on(create_github_client(&github.username, &github.password).list_repos())
    .context("Failed to list GitHub repositories")?;
  let github_summary = clone_all(&github_repos, filter, &base_dir, &opts);
  info!(
    "github: {} cloned, {} skipped, {} failed",
    github_summary.cloned, github_summary.skipped, github_summary.failed
  );

  let bitbucket = creds::service_credentials(&store, "bitbucket")?;
  let bitbucket_repos = rt
    .block_on(create_bitbucket_client(&bitbucket.username, &bitbucket.password).list_repos())
    .context("Failed to list Bitbucket repositories")?;
  let bitbucket_summary = clone_all(&bitbucket_repos, filter, &base_dir, &opts);
  info!(
    "bitbucket: {} cloned, {} skipped, {} failed",
    bitbucket_summary.cloned, bitbucket_summary.skipped, bitbucket_summary.failed
  );

  Ok(())
}

/// Clone every descriptor matching `filter`, one at a time, in listing
/// order.
///
/// Each repository ends in exactly one of three terminal states — cloned,
/// skipped, or failed — and gets exactly one aligned status line. Failures
/// additionally write the transport error text to stderr.
pub fn clone_all(repos: &[RepoDescriptor], filter: &str, base_dir: &Path, opts: &CloneOptions) -> RunSummary {
  let mut summary = RunSummary::default();

  for repo in repos.iter().filter(|repo| matches_filter(repo, filter)) {
    let slug = match clone::repo_slug(&repo.clone_url) {
      Ok(slug) => slug,
      Err(e) => {
        print_error(&e.to_string());
        summary.failed += 1;
        continue;
      }
    };

    let prefix = format!("Cloning repo {slug}");
    print!("{prefix}");
    let _ = io::stdout().flush();

    match clone::clone_into(&repo.clone_url, &base_dir.join(slug), opts) {
      CloneOutcome::Cloned => {
        output::print_status(CloneStatus::Ok, prefix.len());
        summary.cloned += 1;
      }
      CloneOutcome::Skipped => {
        let suffix = " - already exists";
        print!("{suffix}");
        output::print_status(CloneStatus::Skip, prefix.len() + suffix.len());
        summary.skipped += 1;
      }
      CloneOutcome::Failed(e) => {
        let suffix = " - error occurred";
        print!("{suffix}");
        output::print_status(CloneStatus::Failed, prefix.len() + suffix.len());
        eprintln!("{e}");
        summary.failed += 1;
      }
    }
  }

  summary
}
