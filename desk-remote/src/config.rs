use serde::{Deserialize, Serialize};

/// Default REST endpoint. Serves both `posts` and `users`.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Connection settings shared by every remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL; the record's resource name is appended to it.
    pub api_base_url: String,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout_secs: Option<u64>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl RemoteConfig {
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Default::default()
        }
    }

    /// Address of a whole resource, e.g. `https://host/posts`.
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), resource)
    }
}
