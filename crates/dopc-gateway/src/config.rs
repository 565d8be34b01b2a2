//! # Gateway Configuration
//!
//! Configuration for the venue API client.
//!
//! Loaded from environment variables with coded defaults:
//!
//! ```text
//! DOPC_API_BASE_URL            base URL of the venue API
//! DOPC_CONNECT_TIMEOUT_SECS    TCP connect timeout (default 10)
//! DOPC_REQUEST_TIMEOUT_SECS    per-request timeout (default 30)
//! ```

use std::env;
use std::time::Duration;

use crate::error::{GatewayError, GatewayResult};

/// Default venue API base, the home-assignment development host.
pub const DEFAULT_BASE_URL: &str =
    "https://consumer-api.development.dev.woltapi.com/home-assignment-api/v1";

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

/// Configuration for the venue data gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the venue API, without a trailing slash.
    pub base_url: String,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Request timeout (covers the full response body).
    pub request_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(default_connect_timeout()),
            request_timeout: Duration::from_secs(default_request_timeout()),
        }
    }
}

impl GatewayConfig {
    /// Loads configuration from environment variables over defaults.
    pub fn load() -> GatewayResult<Self> {
        let mut config = GatewayConfig::default();

        if let Ok(base_url) = env::var("DOPC_API_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(secs) = env::var("DOPC_CONNECT_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                GatewayError::InvalidConfig("DOPC_CONNECT_TIMEOUT_SECS must be an integer".into())
            })?;
            config.connect_timeout = Duration::from_secs(secs);
        }

        if let Ok(secs) = env::var("DOPC_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                GatewayError::InvalidConfig("DOPC_REQUEST_TIMEOUT_SECS must be an integer".into())
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> GatewayResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(GatewayError::InvalidConfig(format!(
                "Base URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }
        Ok(())
    }

    /// URL of the static venue resource (location).
    pub fn static_endpoint(&self, venue_id: &str) -> String {
        format!("{}/venues/{}/static", self.base_url, venue_id)
    }

    /// URL of the dynamic venue resource (delivery specs).
    pub fn dynamic_endpoint(&self, venue_id: &str) -> String {
        format!("{}/venues/{}/dynamic", self.base_url, venue_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GatewayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_endpoint_building() {
        let config = GatewayConfig {
            base_url: "https://api.example.test/v1".to_string(),
            ..GatewayConfig::default()
        };
        assert_eq!(
            config.static_endpoint("venue-helsinki"),
            "https://api.example.test/v1/venues/venue-helsinki/static"
        );
        assert_eq!(
            config.dynamic_endpoint("venue-helsinki"),
            "https://api.example.test/v1/venues/venue-helsinki/dynamic"
        );
    }

    #[test]
    fn test_validate_rejects_schemeless_url() {
        let config = GatewayConfig {
            base_url: "consumer-api.example.test".to_string(),
            ..GatewayConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GatewayError::InvalidConfig(_))
        ));
    }
}
