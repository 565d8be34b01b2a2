//! # Validation Module
//!
//! The single canonical authority for input validation.
//!
//! Every input rule lives in this module - there is no second, field-level
//! validator hiding in the shell. Check order is part of the contract: the
//! first failing check determines the user-facing error, so it must be
//! deterministic:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Validation Precedence (first failure wins)              │
//! │                                                                         │
//! │  1. Any non-finite coordinate            → InvalidInput                 │
//! │  2. Cart value ≤ 0                       → CartValueNotPositive         │
//! │  3. Latitude outside  [-90, 90]          → LatitudeOutOfRange           │
//! │  4. Longitude outside [-180, 180]        → LongitudeOutOfRange          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart value reaches this module as integer cents, so its own
//! "not-a-number" leg lives where a non-number can still exist: in
//! [`parse_cart_value`], the field-level entry point that converts the raw
//! major-unit string. `parse_cart_value` only ever fails with `InvalidInput`,
//! so running it before [`validate_inputs`] cannot reorder the precedence
//! above.
//!
//! A request that fails validation is rejected before any network call.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

/// Inclusive latitude bounds in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Inclusive longitude bounds in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

// =============================================================================
// Holistic Validation
// =============================================================================

/// Validates the three calculation inputs in canonical precedence order.
///
/// ## Checks
/// 1. Both coordinates are finite numbers
/// 2. Cart value is strictly positive
/// 3. Latitude within [-90, 90]
/// 4. Longitude within [-180, 180]
pub fn validate_inputs(
    cart_value: Money,
    latitude: f64,
    longitude: f64,
) -> ValidationResult<()> {
    if !latitude.is_finite() {
        return Err(ValidationError::InvalidInput {
            field: "latitude",
            reason: "must be numeric".to_string(),
        });
    }
    if !longitude.is_finite() {
        return Err(ValidationError::InvalidInput {
            field: "longitude",
            reason: "must be numeric".to_string(),
        });
    }

    if !cart_value.is_positive() {
        return Err(ValidationError::CartValueNotPositive {
            cents: cart_value.cents(),
        });
    }

    if latitude < LATITUDE_RANGE.0 || latitude > LATITUDE_RANGE.1 {
        return Err(ValidationError::LatitudeOutOfRange { value: latitude });
    }

    if longitude < LONGITUDE_RANGE.0 || longitude > LONGITUDE_RANGE.1 {
        return Err(ValidationError::LongitudeOutOfRange { value: longitude });
    }

    Ok(())
}

// =============================================================================
// Field-Level Cart Value Parsing
// =============================================================================

/// Parses a raw major-unit cart value string (e.g. `"8.50"`) into cents.
///
/// ## Rules
/// - Must not be empty
/// - Must be numeric (an optional sign, digits, optional fraction)
/// - At most two decimal places
/// - Conversion is `round(value * 100)`
///
/// Sign is accepted here: positivity is owned by [`validate_inputs`] so that
/// a negative cart value surfaces as `CartValueNotPositive`, not as a parse
/// failure.
pub fn parse_cart_value(raw: &str) -> ValidationResult<Money> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::InvalidInput {
            field: "cartValue",
            reason: "is required".to_string(),
        });
    }

    let value: f64 = raw.parse().map_err(|_| ValidationError::InvalidInput {
        field: "cartValue",
        reason: "must be a number".to_string(),
    })?;

    if !value.is_finite() {
        return Err(ValidationError::InvalidInput {
            field: "cartValue",
            reason: "must be a number".to_string(),
        });
    }

    if !has_major_unit_shape(raw) {
        return Err(ValidationError::InvalidInput {
            field: "cartValue",
            reason: "must have at most two decimals".to_string(),
        });
    }

    Ok(Money::from_major_units(value))
}

/// Digits, an optional leading sign, and an optional 1-2 digit fraction.
///
/// Rejects exponent notation and bare-dot forms (`"8."`, `".5"`), matching
/// the shape the two-decimal rule was written against.
fn has_major_unit_shape(raw: &str) -> bool {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);

    let (integral, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    if integral.is_empty() || !integral.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    match fraction {
        None => true,
        Some(f) => (1..=2).contains(&f.len()) && f.chars().all(|c| c.is_ascii_digit()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
