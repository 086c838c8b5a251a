//! # Credential Store
//!
//! Nested key-value store for per-service credentials. Keys are dotted
//! paths (`github.username`); intermediate segments are tables, created on
//! demand when writing. The store round-trips through a TOML file in the
//! user's home directory and treats unreadable or unparseable files as
//! empty so callers can fall back to interactive collection.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised by dotted-key traversal
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
  /// An intermediate segment holds a leaf value and cannot be traversed
  #[error("cannot reach '{rest}' through '{segment}': not a table")]
  Structure { segment: String, rest: String },

  /// The requested key is absent
  #[error("key '{0}' not found")]
  NotFound(String),
}

/// A node in the credential tree: either a leaf value or a nested table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
  Leaf(String),
  Table(BTreeMap<String, Node>),
}

impl Node {
  /// Convenience constructor for a leaf node
  pub fn leaf(value: impl Into<String>) -> Self {
    Node::Leaf(value.into())
  }

  /// The leaf value, if this node is a leaf
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Node::Leaf(value) => Some(value),
      Node::Table(_) => None,
    }
  }
}

/// Tree-shaped credential store addressed by dotted keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialStore {
  root: BTreeMap<String, Node>,
}

impl CredentialStore {
  /// Create an empty store
  pub fn new() -> Self {
    Self::default()
  }

  /// Whether the store has no entries
  pub fn is_empty(&self) -> bool {
    self.root.is_empty()
  }

  /// Look up the node at a dotted key.
  ///
  /// Fails with [`StoreError::Structure`] when an intermediate segment is a
  /// leaf, and [`StoreError::NotFound`] when any segment is absent.
  pub fn get(&self, key: &str) -> Result<&Node, StoreError> {
    get_node(&self.root, key, key)
  }

  /// Set the node at a dotted key, creating intermediate tables on demand.
  ///
  /// Fails with [`StoreError::Structure`] when an existing intermediate
  /// segment is a leaf.
  pub fn set(&mut self, key: &str, value: Node) -> Result<(), StoreError> {
    set_node(&mut self.root, key, value)
  }

  /// Whether a dotted key resolves to a node.
  ///
  /// Unlike [`get`](Self::get), a missing or non-table intermediate yields
  /// `false` rather than an error.
  pub fn contains(&self, key: &str) -> bool {
    self.get(key).is_ok()
  }

  /// Leaf value at a dotted key, or `None` on any miss or shape mismatch.
  ///
  /// Replaces attribute-style access: call sites that tolerate unset
  /// providers chain on the option instead of handling errors.
  pub fn lookup(&self, key: &str) -> Option<&str> {
    self.get(key).ok()?.as_str()
  }

  /// Fold a parsed table into the store, leaf by leaf, via repeated `set`
  pub fn merge(&mut self, table: BTreeMap<String, Node>) -> Result<(), StoreError> {
    for (key, node) in table {
      self.merge_node(key, node)?;
    }
    Ok(())
  }

  fn merge_node(&mut self, prefix: String, node: Node) -> Result<(), StoreError> {
    match node {
      Node::Leaf(value) => self.set(&prefix, Node::Leaf(value)),
      Node::Table(table) => {
        for (key, child) in table {
          self.merge_node(format!("{prefix}.{key}"), child)?;
        }
        Ok(())
      }
    }
  }

  /// Load a store from `path`.
  ///
  /// Absent, unreadable, or unparseable files all come back as an empty
  /// store; the caller is expected to fall through to interactive
  /// collection.
  pub fn load(path: &Path) -> Self {
    let content = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(e) => {
        debug!("No credential file at {}: {e}", path.display());
        return Self::new();
      }
    };

    let table: BTreeMap<String, Node> = match toml::from_str(&content) {
      Ok(table) => table,
      Err(e) => {
        debug!("Discarding malformed credential file {}: {e}", path.display());
        return Self::new();
      }
    };

    let mut store = Self::new();
    if let Err(e) = store.merge(table) {
      debug!("Discarding inconsistent credential file {}: {e}", path.display());
      return Self::new();
    }

    store
  }

  /// Write the store to `path` as TOML, restricting permissions to the
  /// owner on Unix.
  pub fn save(&self, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(self).context("Failed to serialize credentials to TOML")?;

    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create credential directory {}", parent.display()))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write credentials to {}", path.display()))?;

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;

      let mut perms = fs::metadata(path)?.permissions();
      perms.set_mode(0o600);
      fs::set_permissions(path, perms)
        .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    }

    Ok(())
  }
}

fn get_node<'a>(table: &'a BTreeMap<String, Node>, key: &str, full_key: &str) -> Result<&'a Node, StoreError> {
  match key.split_once('.') {
    None => table.get(key).ok_or_else(|| StoreError::NotFound(full_key.to_string())),
    Some((segment, rest)) => match table.get(segment) {
      None => Err(StoreError::NotFound(full_key.to_string())),
      Some(Node::Table(inner)) => get_node(inner, rest, full_key),
      Some(Node::Leaf(_)) => Err(StoreError::Structure {
        segment: segment.to_string(),
        rest: rest.to_string(),
      }),
    },
  }
}

fn set_node(table: &mut BTreeMap<String, Node>, key: &str, value: Node) -> Result<(), StoreError> {
  match key.split_once('.') {
    None => {
      table.insert(key.to_string(), value);
      Ok(())
    }
    Some((segment, rest)) => {
      let entry = table
        .entry(segment.to_string())
        .or_insert_with(|| Node::Table(BTreeMap::new()));

      match entry {
        Node::Table(inner) => set_node(inner, rest, value),
        Node::Leaf(_) => Err(StoreError::Structure {
          segment: segment.to_string(),
          rest: rest.to_string(),
        }),
      }
    }
  }
}
