//! # API Error Type
//!
//! Presentation mapping of `QuoteError` for the shell.
//!
//! Every failure the quote flow can produce collapses into one
//! `ApiError { code, message }` pair: a machine-readable code for scripts
//! consuming `--json` output, a human-readable message for the terminal.
//! Gateway details (which endpoint, which status) are logged, not shown -
//! the user-facing kind is the single `VENUE_FETCH_ERROR`.

use serde::Serialize;

use dopc_core::ValidationError;
use dopc_gateway::QuoteError;

/// Error surfaced to the user, with a stable code and a display message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// The external failure kinds of the calculation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A field is not a usable number
    InvalidInput,

    /// Cart value was zero or negative
    CartValueNotPositive,

    /// Latitude outside [-90, 90]
    LatitudeOutOfRange,

    /// Longitude outside [-180, 180]
    LongitudeOutOfRange,

    /// Venue data could not be fetched (network, status, or decode)
    VenueFetchError,

    /// No delivery tier covers this distance
    DeliveryNotPossible,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// What the user should do about it. Fetch failures invite a retry;
    /// everything else needs different inputs.
    pub fn hint(&self) -> &'static str {
        match self.code {
            ErrorCode::VenueFetchError => "This is usually transient - try again.",
            ErrorCode::DeliveryNotPossible => {
                "The venue does not deliver this far. Try a closer location."
            }
            _ => "Check the submitted values and try again.",
        }
    }
}

/// Converts quote-flow errors to API errors.
impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::Validation(v) => {
                let code = match v {
                    ValidationError::InvalidInput { .. } => ErrorCode::InvalidInput,
                    ValidationError::CartValueNotPositive { .. } => ErrorCode::CartValueNotPositive,
                    ValidationError::LatitudeOutOfRange { .. } => ErrorCode::LatitudeOutOfRange,
                    ValidationError::LongitudeOutOfRange { .. } => ErrorCode::LongitudeOutOfRange,
                };
                ApiError::new(code, v.to_string())
            }
            QuoteError::Pricing(p) => ApiError::new(ErrorCode::DeliveryNotPossible, p.to_string()),
            QuoteError::VenueFetch(g) => {
                // Log the detail but show a stable, generic message
                tracing::error!(error = %g, "Venue fetch failed");
                ApiError::new(
                    ErrorCode::VenueFetchError,
                    "Failed to load venue data. Please try again.",
                )
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
