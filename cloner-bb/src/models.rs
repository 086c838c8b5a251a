use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use crate::consts;

/// Represents Bitbucket authentication credentials
#[derive(Clone)]
pub struct BitbucketAuth {
  pub username: String,
  pub password: String,
}

/// Represents a repository entry in a 2.0 API listing page
#[derive(Debug, Deserialize)]
pub struct BitbucketRepo {
  pub name: String,
  pub slug: String,
}

impl BitbucketRepo {
  /// SSH clone URL for this repository
  /// (`git@bitbucket.org:{owner}/{slug}.git`)
  pub fn ssh_url(&self, owner: &str) -> String {
    format!(
      "git@{}:{}/{}.git",
      consts::SSH_HOST,
      quote(owner),
      quote(&self.slug)
    )
  }
}

/// One page of a paginated 2.0 API listing
#[derive(Debug, Deserialize)]
pub struct BitbucketPage {
  pub values: Vec<BitbucketRepo>,
  pub next: Option<String>,
}

// Unreserved characters stay as-is; everything else is percent-encoded
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
  .remove(b'-')
  .remove(b'_')
  .remove(b'.')
  .remove(b'~');

fn quote(segment: &str) -> String {
  utf8_percent_encode(segment, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_page_deserialization() {
    let json = json!({
        "pagelen": 10,
        "values": [
            {"name": "My Repo", "slug": "my-repo", "is_private": true},
        ],
        "next": "https://api.bitbucket.org/2.0/repositories/bucketeer?page=2"
    });

    let page: BitbucketPage = serde_json::from_value(json).unwrap();

    assert_eq!(page.values.len(), 1);
    assert_eq!(page.values[0].name, "My Repo");
    assert_eq!(page.values[0].slug, "my-repo");
    assert!(page.next.is_some());
  }

  #[test]
  fn test_last_page_has_no_next() {
    let json = json!({
        "values": [],
    });

    let page: BitbucketPage = serde_json::from_value(json).unwrap();
    assert!(page.next.is_none());
  }

  #[test]
  fn test_ssh_url_assembly() {
    let repo = BitbucketRepo {
      name: "My Repo".to_string(),
      slug: "my-repo".to_string(),
    };

    assert_eq!(repo.ssh_url("bucketeer"), "git@bitbucket.org:bucketeer/my-repo.git");
  }

  #[test]
  fn test_ssh_url_quotes_segments() {
    let repo = BitbucketRepo {
      name: "odd".to_string(),
      slug: "odd slug".to_string(),
    };

    assert_eq!(repo.ssh_url("team name"), "git@bitbucket.org:team%20name/odd%20slug.git");
  }
}
