//! Property tests for the pricing and distance algebra.
//!
//! These pin down the laws the unit tests only sample: surcharge shape,
//! distance symmetry, and the total-price invariant, across generated inputs.

use dopc_core::distance::distance_meters;
use dopc_core::money::Money;
use dopc_core::pricing::{delivery_fee, price_order, small_order_surcharge};
use dopc_core::types::{
    Coordinate, DeliveryPricing, DistanceLimit, DistanceRange, OrderInfo, VenueData,
};
use dopc_core::validation::validate_inputs;
use proptest::prelude::*;

fn reference_pricing() -> DeliveryPricing {
    DeliveryPricing {
        base_price: Money::from_cents(200),
        distance_ranges: vec![
            DistanceRange {
                min: 0,
                max: DistanceLimit::Below(1000),
                a: Money::from_cents(100),
                b: 10,
            },
            DistanceRange {
                min: 1000,
                max: DistanceLimit::Below(5000),
                a: Money::from_cents(200),
                b: 5,
            },
            DistanceRange {
                min: 5000,
                max: DistanceLimit::Closed,
                a: Money::from_cents(0),
                b: 0,
            },
        ],
    }
}

proptest! {
    #[test]
    fn prop_surcharge_is_zero_at_or_above_minimum(
        minimum in 0i64..100_000,
        extra in 0i64..100_000,
    ) {
        let surcharge = small_order_surcharge(
            Money::from_cents(minimum + extra),
            Money::from_cents(minimum),
        );
        prop_assert_eq!(surcharge, Money::zero());
    }

    #[test]
    fn prop_surcharge_is_exact_shortfall_below_minimum(
        cart in 1i64..100_000,
        shortfall in 1i64..100_000,
    ) {
        let minimum = cart + shortfall;
        let surcharge = small_order_surcharge(
            Money::from_cents(cart),
            Money::from_cents(minimum),
        );
        prop_assert_eq!(surcharge.cents(), shortfall);
    }

    #[test]
    fn prop_surcharge_never_negative(
        cart in -100_000i64..100_000,
        minimum in -100_000i64..100_000,
    ) {
        let surcharge = small_order_surcharge(
            Money::from_cents(cart),
            Money::from_cents(minimum),
        );
        prop_assert!(!surcharge.is_negative());
    }

    #[test]
    fn prop_distance_to_self_is_zero(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
    ) {
        let p = Coordinate::new(lat, lon);
        prop_assert_eq!(distance_meters(p, p), 0);
    }

    #[test]
    fn prop_distance_is_symmetric_and_non_negative(
        lat1 in -90.0f64..=90.0,
        lon1 in -180.0f64..=180.0,
        lat2 in -90.0f64..=90.0,
        lon2 in -180.0f64..=180.0,
    ) {
        let a = Coordinate::new(lat1, lon1);
        let b = Coordinate::new(lat2, lon2);
        let forward = distance_meters(a, b);
        let backward = distance_meters(b, a);
        prop_assert_eq!(forward, backward);
        prop_assert!(forward >= 0);
    }

    #[test]
    fn prop_fee_is_at_least_base_plus_flat_within_serviceable_range(
        distance in 0i64..5000,
    ) {
        let pricing = reference_pricing();
        let fee = delivery_fee(distance, &pricing).unwrap();
        prop_assert!(fee >= pricing.base_price);
    }

    #[test]
    fn prop_total_price_invariant_holds_for_every_result(
        cart in 1i64..1_000_000,
        // Keep the user within a few km of the venue so a tier matches
        lat_offset in -0.02f64..0.02,
        lon_offset in -0.02f64..0.02,
    ) {
        let venue = VenueData {
            location: Coordinate::new(60.1699, 24.9384),
            order_info: OrderInfo {
                order_minimum_no_surcharge: Money::from_cents(1000),
                pricing: reference_pricing(),
            },
        };
        let user = Coordinate::new(60.1699 + lat_offset, 24.9384 + lon_offset);

        prop_assert!(validate_inputs(Money::from_cents(cart), user.latitude, user.longitude).is_ok());

        let result = price_order(Money::from_cents(cart), user, &venue).unwrap();
        prop_assert_eq!(
            result.total_price,
            result.cart_value + result.small_order_surcharge + result.delivery_fee
        );
        prop_assert!(!result.small_order_surcharge.is_negative());
        prop_assert!(!result.delivery_fee.is_negative());
        prop_assert!(result.delivery_distance >= 0);
    }
}
