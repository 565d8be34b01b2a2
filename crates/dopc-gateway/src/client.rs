//! # Venue Client
//!
//! HTTP client for the two venue endpoints.
//!
//! One `fetch_venue` call performs exactly two sequential GETs - static
//! (location), then dynamic (delivery specs) - and succeeds only if both
//! return an HTTP success status with a decodable body. Failure is atomic:
//! the assembled `VenueData` exists only after the second read lands, so no
//! partial venue data can escape. The client makes a single attempt; any
//! retry policy belongs to the shell.

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use dopc_core::types::VenueData;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::wire::{assemble_venue_data, DynamicResponse, StaticResponse};

/// Client for the venue data API.
#[derive(Debug, Clone)]
pub struct VenueClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl VenueClient {
    /// Creates a client over the given configuration.
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GatewayError::InvalidConfig(e.to_string()))?;

        Ok(VenueClient { http, config })
    }

    /// Creates a client with environment-derived configuration.
    pub fn from_env() -> GatewayResult<Self> {
        Self::new(GatewayConfig::load()?)
    }

    /// Fetches and normalizes one venue's data.
    ///
    /// ## Sequence
    /// 1. `GET {base}/venues/{id}/static` → location
    /// 2. `GET {base}/venues/{id}/dynamic` → delivery specs
    ///
    /// Both must succeed; the first failure aborts the fetch.
    pub async fn fetch_venue(&self, venue_id: &str) -> GatewayResult<VenueData> {
        let static_endpoint = self.config.static_endpoint(venue_id);
        let static_body: StaticResponse = self.get_json(&static_endpoint).await?;

        let dynamic_endpoint = self.config.dynamic_endpoint(venue_id);
        let dynamic_body: DynamicResponse = self.get_json(&dynamic_endpoint).await?;

        let venue = assemble_venue_data(static_body, dynamic_body);
        info!(
            venue_id = %venue_id,
            latitude = venue.location.latitude,
            longitude = venue.location.longitude,
            tiers = venue.order_info.pricing.distance_ranges.len(),
            "Venue data fetched"
        );

        Ok(venue)
    }

    /// One GET returning a decoded JSON body.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> GatewayResult<T> {
        debug!(endpoint = %endpoint, "GET venue resource");

        let response = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(|e| GatewayError::from_reqwest(e, endpoint))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::HttpStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::from_reqwest(e, endpoint))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = GatewayConfig {
            base_url: "not-a-url".to_string(),
            ..GatewayConfig::default()
        };
        assert!(matches!(
            VenueClient::new(config),
            Err(GatewayError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_client_builds_with_default_config() {
        assert!(VenueClient::new(GatewayConfig::default()).is_ok());
    }
}
