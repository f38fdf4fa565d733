//! Where the plant service lives and how long to wait for it.

use std::time::Duration;

/// Address of the service used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:6001";

/// Connection settings for [`HttpPlantService`](crate::service::HttpPlantService).
///
/// `base_url` is the service root; the plants resource is addressed as
/// `{base_url}/plants`. No timeout is applied unless one is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
