//! # Pricing Engine
//!
//! Small-order surcharge and distance-tiered delivery fee.
//!
//! Both operations are pure functions over validated inputs and a venue's
//! pricing descriptor. Tier matching walks `distance_ranges` in stored order
//! and the first tier containing the distance wins; a schedule whose tail is
//! `DistanceLimit::Closed` simply stops matching there, which surfaces as
//! [`PricingError::DeliveryNotPossible`].

use crate::distance::distance_meters;
use crate::error::PricingError;
use crate::money::Money;
use crate::types::{CalculationResult, Coordinate, DeliveryPricing, VenueData};

// =============================================================================
// Small-Order Surcharge
// =============================================================================

/// Surcharge for carts below the venue's no-surcharge minimum.
///
/// `max(0, order_minimum - cart_value)`: zero once the cart reaches the
/// minimum, never negative.
pub fn small_order_surcharge(cart_value: Money, order_minimum_no_surcharge: Money) -> Money {
    order_minimum_no_surcharge.saturating_sub_floor_zero(cart_value)
}

// =============================================================================
// Delivery Fee
// =============================================================================

/// Distance-tiered delivery fee.
///
/// Fee = `base_price + tier.a + round(tier.b * distance / 10)`.
///
/// The distance-proportional term is computed in integer arithmetic as
/// `(b * distance + 5) / 10`; with `b` and `distance` non-negative this is
/// round-half-up, identical to round-half-away-from-zero. The term is rounded
/// exactly once, here.
pub fn delivery_fee(
    distance_meters: i64,
    pricing: &DeliveryPricing,
) -> Result<Money, PricingError> {
    let tier = pricing
        .distance_ranges
        .iter()
        .find(|range| range.contains(distance_meters))
        .ok_or(PricingError::DeliveryNotPossible { distance_meters })?;

    let distance_component = Money::from_cents((tier.b * distance_meters + 5) / 10);
    Ok(pricing.base_price + tier.a + distance_component)
}

// =============================================================================
// Full Quote Composition
// =============================================================================

/// Prices one order against a venue: distance, surcharge, fee, total.
///
/// Inputs are assumed validated. This is the whole pricing flow minus I/O;
/// the gateway's quote service calls it after resolving `VenueData`.
pub fn price_order(
    cart_value: Money,
    user_location: Coordinate,
    venue: &VenueData,
) -> Result<CalculationResult, PricingError> {
    let delivery_distance = distance_meters(user_location, venue.location);
    let surcharge = small_order_surcharge(cart_value, venue.order_info.order_minimum_no_surcharge);
    let fee = delivery_fee(delivery_distance, &venue.order_info.pricing)?;

    Ok(CalculationResult::new(
        cart_value,
        surcharge,
        fee,
        delivery_distance,
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DistanceLimit, DistanceRange, OrderInfo};

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    /// The reference schedule: two bounded tiers, then a closed tail.
    fn reference_pricing() -> DeliveryPricing {
        DeliveryPricing {
            base_price: cents(200),
            distance_ranges: vec![
                DistanceRange {
                    min: 0,
                    max: DistanceLimit::Below(1000),
                    a: cents(100),
                    b: 10,
                },
                DistanceRange {
                    min: 1000,
                    max: DistanceLimit::Below(5000),
                    a: cents(200),
                    b: 5,
                },
                DistanceRange {
                    min: 5000,
                    max: DistanceLimit::Closed,
                    a: cents(0),
                    b: 0,
                },
            ],
        }
    }

    #[test]
    fn test_surcharge_below_minimum() {
        assert_eq!(small_order_surcharge(cents(800), cents(1000)), cents(200));
    }

    #[test]
    fn test_surcharge_at_minimum_is_zero() {
        assert_eq!(small_order_surcharge(cents(1000), cents(1000)), cents(0));
    }

    #[test]
    fn test_surcharge_above_minimum_is_zero() {
        assert_eq!(small_order_surcharge(cents(1200), cents(1000)), cents(0));
    }

    #[test]
    fn test_delivery_fee_reference_case() {
        // 200 base + 200 flat + round(5 * 1500 / 10) = 1150
        let fee = delivery_fee(1500, &reference_pricing()).unwrap();
        assert_eq!(fee, cents(1150));
    }

    #[test]
    fn test_delivery_fee_first_tier() {
        // 200 base + 100 flat + round(10 * 500 / 10) = 800
        let fee = delivery_fee(500, &reference_pricing()).unwrap();
        assert_eq!(fee, cents(800));
    }

    #[test]
    fn test_delivery_fee_tier_boundaries() {
        let pricing = reference_pricing();
        // 999 m is still tier one: 200 + 100 + 999
        assert_eq!(delivery_fee(999, &pricing).unwrap(), cents(1299));
        // 1000 m rolls into tier two: 200 + 200 + 500
        assert_eq!(delivery_fee(1000, &pricing).unwrap(), cents(900));
        // 4999 m is the last serviceable meter: 200 + 200 + 2500
        assert_eq!(delivery_fee(4999, &pricing).unwrap(), cents(2900));
    }

    #[test]
    fn test_delivery_not_possible_beyond_closed_tier() {
        let pricing = reference_pricing();
        for distance in [5000, 6000, i64::MAX / 1000] {
            let err = delivery_fee(distance, &pricing).unwrap_err();
            assert!(matches!(err, PricingError::DeliveryNotPossible { .. }));
        }
    }

    #[test]
    fn test_delivery_not_possible_on_empty_schedule() {
        let pricing = DeliveryPricing {
            base_price: cents(200),
            distance_ranges: vec![],
        };
        assert!(delivery_fee(0, &pricing).is_err());
    }

    #[test]
    fn test_distance_term_rounds_half_up() {
        // b = 1, distance = 5: 1 * 5 / 10 = 0.5 → 1 cent
        let pricing = DeliveryPricing {
            base_price: cents(0),
            distance_ranges: vec![DistanceRange {
                min: 0,
                max: DistanceLimit::Below(100),
                a: cents(0),
                b: 1,
            }],
        };
        assert_eq!(delivery_fee(5, &pricing).unwrap(), cents(1));
        assert_eq!(delivery_fee(4, &pricing).unwrap(), cents(0));
    }

    #[test]
    fn test_first_matching_tier_wins_in_stored_order() {
        // Overlapping tiers: the earlier one must be chosen
        let pricing = DeliveryPricing {
            base_price: cents(0),
            distance_ranges: vec![
                DistanceRange {
                    min: 0,
                    max: DistanceLimit::Below(2000),
                    a: cents(100),
                    b: 0,
                },
                DistanceRange {
                    min: 0,
                    max: DistanceLimit::Below(2000),
                    a: cents(900),
                    b: 0,
                },
            ],
        };
        assert_eq!(delivery_fee(1500, &pricing).unwrap(), cents(100));
    }

    #[test]
    fn test_price_order_composes_and_totals() {
        let venue = VenueData {
            location: Coordinate::new(60.1699, 24.9384),
            order_info: OrderInfo {
                order_minimum_no_surcharge: cents(1000),
                pricing: reference_pricing(),
            },
        };

        // User at the venue's own doorstep: distance 0, tier one applies
        let result = price_order(cents(850), venue.location, &venue).unwrap();
        assert_eq!(result.delivery_distance, 0);
        assert_eq!(result.small_order_surcharge, cents(150));
        assert_eq!(result.delivery_fee, cents(300)); // 200 + 100 + 0
        assert_eq!(result.total_price, cents(850 + 150 + 300));
    }

    #[test]
    fn test_price_order_propagates_delivery_not_possible() {
        let venue = VenueData {
            // ~16 km from the user below: beyond every serviceable tier
            location: Coordinate::new(60.2055, 24.6559),
            order_info: OrderInfo {
                order_minimum_no_surcharge: cents(1000),
                pricing: reference_pricing(),
            },
        };

        let user = Coordinate::new(60.1699, 24.9384);
        let err = price_order(cents(850), user, &venue).unwrap_err();
        assert!(matches!(err, PricingError::DeliveryNotPossible { .. }));
    }
}
