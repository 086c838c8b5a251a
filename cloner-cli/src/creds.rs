//! # Credential Bootstrap
//!
//! Fills in the credential store before the clone run starts. Loading the
//! store from disk is the store's own concern; this module only decides
//! which services still need credentials, prompts for them, and persists
//! the store when something new was collected.

use std::path::Path;

use anyhow::{Context, Result};
use cloner_core::{CredentialStore, Node, cloner_theme};
use dialoguer::{Input, Password};
use tracing::debug;

/// Credentials for one service
#[derive(Debug, Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}

/// Services in `services` that do not yet have a complete credential record
pub fn missing_services<'a>(store: &CredentialStore, services: &[&'a str]) -> Vec<&'a str> {
  services
    .iter()
    .filter(|service| {
      !store.contains(&format!("{service}.username")) || !store.contains(&format!("{service}.password"))
    })
    .copied()
    .collect()
}

/// Prompt for every service missing from the store, in the given order,
/// and persist the store to `path` if anything was collected.
///
/// A store that already covers every service is left untouched on disk.
pub fn ensure_credentials(store: &mut CredentialStore, services: &[&str], path: &Path) -> Result<()> {
  let missing = missing_services(store, services);

  if missing.is_empty() {
    debug!("All service credentials present in {}", path.display());
    return Ok(());
  }

  for service in &missing {
    let username: String = Input::with_theme(&cloner_theme())
      .with_prompt(format!("Enter your {service} username"))
      .interact_text()
      .with_context(|| format!("Failed to read {service} username"))?;

    let password = Password::with_theme(&cloner_theme())
      .with_prompt(format!("Enter your {service} password"))
      .interact()
      .with_context(|| format!("Failed to read {service} password"))?;

    store.set(&format!("{service}.username"), Node::leaf(username))?;
    store.set(&format!("{service}.password"), Node::leaf(password))?;
  }

  store
    .save(path)
    .with_context(|| format!("Failed to persist credentials to {}", path.display()))
}

/// Read a service's credential record out of the store.
///
/// A missing key here means the bootstrap step was skipped or the service
/// is not configured; that is fatal at this call site.
pub fn service_credentials(store: &CredentialStore, service: &str) -> Result<Credentials> {
  let username = store
    .get(&format!("{service}.username"))?
    .as_str()
    .with_context(|| format!("'{service}.username' is not a value"))?
    .to_string();

  let password = store
    .get(&format!("{service}.password"))?
    .as_str()
    .with_context(|| format!("'{service}.password' is not a value"))?
    .to_string();

  Ok(Credentials { username, password })
}

#[cfg(test)]
mod tests {
  use cloner_core::StoreError;

  use super::*;

  fn populated_store() -> CredentialStore {
    let mut store = CredentialStore::new();
    store.set("github.username", Node::leaf("octocat")).unwrap();
    store.set("github.password", Node::leaf("hunter2")).unwrap();
    store
  }

  #[test]
  fn test_missing_services_on_empty_store() {
    let store = CredentialStore::new();

    assert_eq!(
      missing_services(&store, &["bitbucket", "github"]),
      vec!["bitbucket", "github"]
    );
  }

  #[test]
  fn test_missing_services_skips_complete_records() {
    let store = populated_store();

    assert_eq!(missing_services(&store, &["bitbucket", "github"]), vec!["bitbucket"]);
  }

  #[test]
  fn test_missing_services_counts_partial_records() {
    let mut store = CredentialStore::new();
    store.set("github.username", Node::leaf("octocat")).unwrap();

    // Username alone is not a usable record
    assert_eq!(missing_services(&store, &["github"]), vec!["github"]);
  }

  #[test]
  fn test_service_credentials_reads_record() {
    let store = populated_store();

    let creds = service_credentials(&store, "github").unwrap();
    assert_eq!(creds.username, "octocat");
    assert_eq!(creds.password, "hunter2");
  }

  #[test]
  fn test_service_credentials_missing_is_fatal() {
    let store = CredentialStore::new();

    let err = service_credentials(&store, "github").unwrap_err();
    assert_eq!(
      err.downcast_ref::<StoreError>(),
      Some(&StoreError::NotFound("github.username".to_string()))
    );
  }
}
