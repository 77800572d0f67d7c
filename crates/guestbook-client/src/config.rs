use std::time::Duration;

use anyhow::Result;

/// Client configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the guestbook backend, no trailing slash required.
    pub base_url: String,
    /// Applied to every request; the original client would hang forever on
    /// a stalled fetch, this client fails instead.
    pub request_timeout: Duration,
    /// Page size used until the user supplies one. Matches the backend's
    /// own server-side default.
    pub default_max_results: u32,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(10),
            default_max_results: 5,
        }
    }

    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("GUESTBOOK_API_URL").unwrap_or_else(|_| "http://localhost:8080".into());
        let timeout_secs: u64 = std::env::var("GUESTBOOK_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()?;
        let default_max_results: u32 = std::env::var("GUESTBOOK_MAX_RESULTS")
            .unwrap_or_else(|_| "5".into())
            .parse()?;

        Ok(Self {
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            default_max_results,
        })
    }
}
