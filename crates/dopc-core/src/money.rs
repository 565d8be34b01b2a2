//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! All monetary values in DOPC are integers in minor currency units (cents).
//! Cart value, surcharge, delivery fee, and total never touch floating-point
//! arithmetic; the only float-to-cents conversion happens at the input
//! boundary via [`Money::from_major_units`], with one documented rounding.
//!
//! ## Usage
//! ```rust
//! use dopc_core::money::Money;
//!
//! let cart = Money::from_cents(850); // 8.50 EUR
//! let fee = Money::from_cents(190);
//! assert_eq!((cart + fee).cents(), 1040);
//! assert_eq!(format!("{}", cart + fee), "10.40€");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Serializes as a bare integer so that API results carry raw cents,
/// matching the venue wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a major-unit amount (e.g. `8.50` EUR) to cents.
    ///
    /// Conversion is `round(value * 100)` with round-half-away-from-zero
    /// (`f64::round`). Callers are expected to have already bounded the input
    /// to at most two decimals, so the rounding only absorbs float noise.
    #[inline]
    pub fn from_major_units(value: f64) -> Self {
        Money((value * 100.0).round() as i64)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Subtraction floored at zero.
    ///
    /// `a.saturating_sub_floor_zero(b) == max(0, a - b)`. This is the exact
    /// shape of the small-order surcharge rule.
    #[inline]
    pub const fn saturating_sub_floor_zero(&self, other: Money) -> Money {
        let diff = self.0 - other.0;
        if diff > 0 {
            Money(diff)
        } else {
            Money(0)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders major.minor with a trailing euro sign (`8.50€`),
/// the rendering the result surface uses. Negative values keep the sign
/// in front (`-5.50€`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}€", sign, self.major().abs(), self.minor())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
