use std::time::Duration;

pub const DEFAULT_API_ROOT: &str = "https://api.airtable.com/v0";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote store connection settings.
///
/// Constructed explicitly by the hosting process and passed into
/// [`crate::StoreClient::new`]; nothing in this crate reads credentials
/// from the environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// API root without trailing slash (e.g., "https://api.airtable.com/v0")
    pub api_root: String,

    /// Identifier of the base (database) holding the tables
    pub base_id: String,

    /// Bearer token
    pub token: String,

    /// Per-request timeout; an elapsed timeout surfaces as a retryable
    /// transport error
    pub timeout: Duration,
}

impl StoreConfig {
    pub fn new(base_id: &str, token: &str) -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_string(),
            base_id: base_id.to_string(),
            token: token.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_root(mut self, api_root: &str) -> Self {
        self.api_root = api_root.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
