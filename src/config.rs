use crate::digest::DEFAULT_NONCE_COUNT;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default TCP connect timeout, in seconds
pub const DEFAULT_DIAL_TIMEOUT_SECS: u64 = 30;

/// Default cap on a response body
pub const DEFAULT_RESPONSE_LIMIT: u64 = 10 * 1024 * 1024;

/// Endpoint and tunables of a [`Transport`](../struct.Transport.html).
///
/// Deserializable with every field optional, so it can be embedded in an
/// application config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Service URL, used for both the probe and the authenticated request
    pub url: String,
    /// Accept any TLS certificate
    pub skip_certificate_verification: bool,
    /// Bounds connection establishment only, not the exchange
    pub dial_timeout_secs: u64,
    /// Nonce count sent with every Authorization header
    pub nonce_count: u32,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Largest response body accepted, in bytes
    pub response_limit: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            skip_certificate_verification: false,
            dial_timeout_secs: DEFAULT_DIAL_TIMEOUT_SECS,
            nonce_count: DEFAULT_NONCE_COUNT,
            user_agent: concat!("powerschool/", env!("CARGO_PKG_VERSION")).to_string(),
            response_limit: DEFAULT_RESPONSE_LIMIT,
        }
    }
}

impl TransportConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn skip_certificate_verification(mut self, skip: bool) -> Self {
        self.skip_certificate_verification = skip;
        self
    }

    pub fn dial_timeout(mut self, timeout: Duration) -> Self {
        self.dial_timeout_secs = timeout.as_secs();
        self
    }

    pub fn nonce_count(mut self, nc: u32) -> Self {
        self.nonce_count = nc;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn response_limit(mut self, limit: u64) -> Self {
        self.response_limit = limit;
        self
    }

    /// Connect timeout as a `Duration`
    pub fn dial_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.dial_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransportConfig::new("https://example.org/ws");

        assert_eq!(config.url, "https://example.org/ws");
        assert!(!config.skip_certificate_verification);
        assert_eq!(config.dial_timeout_duration(), Duration::from_secs(30));
        assert_eq!(config.nonce_count, 1);
        assert!(config.user_agent.starts_with("powerschool/"));
    }

    #[test]
    fn test_builder() {
        let config = TransportConfig::new("http://localhost")
            .skip_certificate_verification(true)
            .dial_timeout(Duration::from_secs(5))
            .nonce_count(3)
            .user_agent("probe/1.0")
            .response_limit(1024);

        assert!(config.skip_certificate_verification);
        assert_eq!(config.dial_timeout_secs, 5);
        assert_eq!(config.nonce_count, 3);
        assert_eq!(config.user_agent, "probe/1.0");
        assert_eq!(config.response_limit, 1024);
    }
}
