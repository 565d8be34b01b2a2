//! # Gateway Error Types
//!
//! Error types for the venue fetch and the quote flow.
//!
//! `GatewayError` keeps internally distinguished variants (network vs. status
//! vs. decode) for logs and diagnostics, but the calculation API exposes all
//! of them as the single `VENUE_FETCH_ERROR` kind: the caller's remediation
//! (retry the fetch) is the same for each. `DeliveryNotPossible` stays a
//! separate kind end to end because its remediation differs - change the
//! inputs, not the network.

use dopc_core::{PricingError, ValidationError};
use thiserror::Error;

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

// =============================================================================
// Gateway Error
// =============================================================================

/// Venue fetch failures.
///
/// Any of these on either of the two reads fails the whole fetch; no partial
/// `VenueData` is ever exposed.
#[derive(Debug, Error)]
pub enum GatewayError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid gateway configuration.
    #[error("Invalid gateway configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request never produced a response (connect failure, timeout, DNS).
    #[error("Venue request failed: {0}")]
    RequestFailed(String),

    /// The venue API answered with a non-success status.
    #[error("Venue API returned HTTP {status} for {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    // =========================================================================
    // Response Errors
    // =========================================================================
    /// The response body was not the expected shape.
    #[error("Malformed venue response from {endpoint}: {detail}")]
    MalformedResponse { endpoint: String, detail: String },
}

impl GatewayError {
    /// Classifies a reqwest failure for the given endpoint.
    ///
    /// Body-decode failures count as malformed responses; everything else is
    /// a transport failure.
    pub fn from_reqwest(err: reqwest::Error, endpoint: &str) -> Self {
        if err.is_decode() {
            GatewayError::MalformedResponse {
                endpoint: endpoint.to_string(),
                detail: err.to_string(),
            }
        } else {
            GatewayError::RequestFailed(err.to_string())
        }
    }
}

// =============================================================================
// Quote Error
// =============================================================================

/// The full failure surface of the calculation API.
///
/// One variant per remediation path: fix the inputs, accept the business
/// outcome, or retry the fetch.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Input validation failed; no network call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The distance exceeds every serviceable tier.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Fetching venue data failed.
    #[error("Failed to load venue data: {0}")]
    VenueFetch(#[from] GatewayError),
}

impl QuoteError {
    /// Returns true if retrying the same request could succeed.
    ///
    /// Only fetch failures are transient; validation failures and
    /// `DeliveryNotPossible` need different inputs.
    pub fn is_retryable(&self) -> bool {
        matches!(self, QuoteError::VenueFetch(_))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_fetch_failures_are_retryable() {
        let fetch: QuoteError = GatewayError::RequestFailed("connection refused".into()).into();
        assert!(fetch.is_retryable());

        let validation: QuoteError =
            ValidationError::CartValueNotPositive { cents: -100 }.into();
        assert!(!validation.is_retryable());

        let business: QuoteError = PricingError::DeliveryNotPossible {
            distance_meters: 6000,
        }
        .into();
        assert!(!business.is_retryable());
    }

    #[test]
    fn test_error_display_names_the_endpoint() {
        let err = GatewayError::HttpStatus {
            status: 404,
            endpoint: "/venues/x/static".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("/venues/x/static"));
    }
}
