//! # Error Types
//!
//! Domain-specific error types for dopc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  dopc-core errors (this file)                                          │
//! │  ├── ValidationError  - Input validation failures                      │
//! │  ├── PricingError     - Delivery not serviceable at this distance      │
//! │  └── CoreError        - Umbrella over both                             │
//! │                                                                         │
//! │  dopc-gateway errors (separate crate)                                  │
//! │  ├── GatewayError     - Venue fetch failures                           │
//! │  └── QuoteError       - Full quote-flow failure surface                │
//! │                                                                         │
//! │  CLI (app)                                                             │
//! │  └── ApiError         - What the user sees (code + message)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (offending value, bounds)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur before any computation or network call; a request that fails
/// validation never reaches the venue gateway. The variants correspond 1:1 to
/// the externally visible failure kinds of the calculation API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A field is not a usable number (non-numeric text, NaN/infinite
    /// coordinate, or a cart value with more than two decimals).
    #[error("{field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Cart value must be strictly positive once converted to cents.
    #[error("Cart value must be positive")]
    CartValueNotPositive { cents: i64 },

    /// Latitude must lie in [-90, 90] degrees.
    #[error("Latitude must be between -90 and 90")]
    LatitudeOutOfRange { value: f64 },

    /// Longitude must lie in [-180, 180] degrees.
    #[error("Longitude must be between -180 and 180")]
    LongitudeOutOfRange { value: f64 },
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Pricing errors.
///
/// `DeliveryNotPossible` is an expected business outcome (the venue does not
/// serve this distance), not a system fault. It is kept distinct from fetch
/// failures all the way to the user: the remediation differs (choose a closer
/// location vs. retry the network).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// No distance tier matches: the distance exceeds every serviceable range.
    #[error("Delivery is not available for this distance ({distance_meters} m)")]
    DeliveryNotPossible { distance_meters: i64 },
}

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for core operations that can fail either way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Pricing failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
