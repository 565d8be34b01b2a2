//! # Domain Types
//!
//! Core domain types used throughout DOPC.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │   Coordinate    │   │   DeliveryPricing    │   │  DistanceRange  │  │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ─────────────  │  │
//! │  │  latitude       │   │  base_price          │   │  min (meters)   │  │
//! │  │  longitude      │   │  distance_ranges ────┼──►│  max (limit)    │  │
//! │  └────────┬────────┘   └──────────┬───────────┘   │  a, b (cents)   │  │
//! │           │                       │               └─────────────────┘  │
//! │           │            ┌──────────┴───────────┐                        │
//! │           │            │      OrderInfo       │                        │
//! │           │            │  order_minimum_...   │                        │
//! │           │            └──────────┬───────────┘                        │
//! │           └──────────┬────────────┘                                    │
//! │                ┌─────┴─────┐          ┌───────────────────┐            │
//! │                │ VenueData │   ───►   │ CalculationResult │            │
//! │                └───────────┘          └───────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `VenueData` is assembled by the gateway from one successful two-call fetch
//! and is read-only afterward; everything here is a plain value type.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Coordinate
// =============================================================================

/// A geographic point in degrees.
///
/// ## Invariants (enforced by the validation module before any use)
/// - `latitude` ∈ [-90, 90], finite
/// - `longitude` ∈ [-180, 180], finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude, in that order.
    ///
    /// The venue wire contract delivers `[longitude, latitude]`; re-pairing
    /// into named fields happens exactly once, in the gateway's wire layer.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

// =============================================================================
// Distance Tiers
// =============================================================================

/// Upper bound of a distance tier.
///
/// The wire contract overloads `max = 0` to mean "this tier never matches" —
/// it closes the fee schedule rather than opening an unbounded tier. That
/// magic value is translated into this tagged form at the wire boundary so
/// the matching logic never has to special-case zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceLimit {
    /// Tier applies to distances strictly below this many meters.
    Below(i64),

    /// Tier never matches: delivery is not offered beyond the previous
    /// tier's boundary.
    Closed,
}

/// One tier of the delivery fee schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRange {
    /// Inclusive lower bound in meters.
    pub min: i64,

    /// Exclusive upper bound, or `Closed` for the schedule-ending sentinel.
    pub max: DistanceLimit,

    /// Flat add-on in cents.
    pub a: Money,

    /// Distance multiplier in cents per 10 meters (the proportional term is
    /// rounded once, after multiplying).
    pub b: i64,
}

impl DistanceRange {
    /// Whether this tier covers the given distance.
    ///
    /// A `Closed` tier matches nothing by definition.
    pub fn contains(&self, distance_meters: i64) -> bool {
        match self.max {
            DistanceLimit::Below(max) => distance_meters >= self.min && distance_meters < max,
            DistanceLimit::Closed => false,
        }
    }
}

/// A venue's delivery fee schedule.
///
/// `distance_ranges` is matched in stored order; the first tier containing
/// the distance wins. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPricing {
    pub base_price: Money,
    pub distance_ranges: Vec<DistanceRange>,
}

// =============================================================================
// Venue Data
// =============================================================================

/// Order-level pricing rules for a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    /// Cart values below this minimum (cents) incur a small-order surcharge.
    pub order_minimum_no_surcharge: Money,

    /// Delivery fee schedule.
    pub pricing: DeliveryPricing,
}

/// Everything the pricing engine needs to know about a venue.
///
/// Created by one successful gateway fetch (both endpoint reads succeeded);
/// read-only afterward and cached for the lifetime of one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueData {
    pub location: Coordinate,
    pub order_info: OrderInfo,
}

// =============================================================================
// Calculation Result
// =============================================================================

/// A completed delivery price quote.
///
/// ## Invariant
/// `total_price == cart_value + small_order_surcharge + delivery_fee` for
/// every value of this type; the only constructor computes the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Cart value in cents, as validated.
    pub cart_value: Money,

    /// Surcharge applied when the cart is below the venue minimum.
    pub small_order_surcharge: Money,

    /// Distance-tiered delivery fee.
    pub delivery_fee: Money,

    /// Straight-line delivery distance in meters.
    pub delivery_distance: i64,

    /// Grand total: cart + surcharge + fee.
    pub total_price: Money,
}

impl CalculationResult {
    /// Assembles a result, computing the total from its parts.
    pub fn new(
        cart_value: Money,
        small_order_surcharge: Money,
        delivery_fee: Money,
        delivery_distance: i64,
    ) -> Self {
        CalculationResult {
            cart_value,
            small_order_surcharge,
            delivery_fee,
            delivery_distance,
            total_price: cart_value + small_order_surcharge + delivery_fee,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
