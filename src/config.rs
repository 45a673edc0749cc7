//! Run configuration
//!
//! Everything the fetch and dispatch steps need is carried in [`SyncConfig`],
//! which is built once at startup and handed to the components explicitly.

use crate::error::{Result, SyncError};
use std::fmt;
use std::time::Duration;

/// Default HTTP timeout applied to every request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Store credentials and dispatch settings for one run
#[derive(Clone)]
pub struct SyncConfig {
    /// Admin API base, e.g. `https://shop.myshopify.com/admin/api/2024-04`
    pub store_url: String,
    pub access_token: String,
    /// Inventory location whose levels are set
    pub location_id: i64,
    /// Upper bound on in-flight update requests (`None` = unbounded)
    max_concurrency: Option<usize>,
    pub timeout: Duration,
}

impl SyncConfig {
    /// Validate and normalize a configuration
    pub fn new(
        store_url: impl Into<String>,
        access_token: impl Into<String>,
        location_id: i64,
    ) -> Result<Self> {
        let store_url = store_url.into().trim().trim_end_matches('/').to_string();
        let access_token = access_token.into().trim().to_string();

        if store_url.is_empty() {
            return Err(SyncError::Config("store URL is empty".to_string()));
        }
        if !store_url.starts_with("http://") && !store_url.starts_with("https://") {
            return Err(SyncError::Config(format!(
                "store URL must start with http:// or https://: {}",
                store_url
            )));
        }
        if access_token.is_empty() {
            return Err(SyncError::Config("access token is empty".to_string()));
        }

        Ok(Self {
            store_url,
            access_token,
            location_id,
            max_concurrency: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Cap the number of concurrent update requests
    pub fn with_max_concurrency(mut self, limit: Option<usize>) -> Result<Self> {
        if limit == Some(0) {
            return Err(SyncError::Config(
                "max concurrency must be greater than zero".to_string(),
            ));
        }
        self.max_concurrency = limit;
        Ok(self)
    }

    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("store_url", &self.store_url)
            .field("access_token", &"<redacted>")
            .field("location_id", &self.location_id)
            .field("max_concurrency", &self.max_concurrency)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash() {
        let config =
            SyncConfig::new("https://shop.example.com/admin/api/2024-04/", "token", 42).unwrap();
        assert_eq!(config.store_url, "https://shop.example.com/admin/api/2024-04");
        assert_eq!(config.location_id, 42);
        assert_eq!(config.max_concurrency(), None);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn rejects_empty_token() {
        let result = SyncConfig::new("https://shop.example.com", "  ", 1);
        assert!(matches!(result, Err(SyncError::Config(_))));
    }

    #[test]
    fn rejects_url_without_scheme() {
        let result = SyncConfig::new("shop.example.com", "token", 1);
        assert!(matches!(result, Err(SyncError::Config(_))));
    }

    #[test]
    fn rejects_zero_concurrency() {
        let config = SyncConfig::new("https://shop.example.com", "token", 1).unwrap();
        assert!(config.clone().with_max_concurrency(Some(0)).is_err());
        assert_eq!(
            config.with_max_concurrency(Some(8)).unwrap().max_concurrency(),
            Some(8)
        );
    }

    #[test]
    fn debug_hides_token() {
        let config = SyncConfig::new("https://shop.example.com", "shpat_secret", 1).unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("shpat_secret"));
        assert!(printed.contains("<redacted>"));
    }
}
