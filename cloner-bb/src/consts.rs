//! Constants for the cloner-bb client

/// Base URL for the Bitbucket Cloud API
pub const API_BASE_URL: &str = "https://api.bitbucket.org";

/// Host used when assembling SSH clone URLs
pub const SSH_HOST: &str = "bitbucket.org";

/// User-Agent header value for the Bitbucket API client
pub const USER_AGENT: &str = concat!("cloner-cli/", env!("CARGO_PKG_VERSION"));

/// Page size requested when walking the repository list
pub const PAGE_LEN: usize = 100;
