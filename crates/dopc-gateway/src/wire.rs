//! # Venue Wire Contract
//!
//! Serde DTOs for the two venue endpoints, plus normalization into the core's
//! `VenueData`.
//!
//! Two quirks of the contract are absorbed here, exactly once:
//!
//! - The static resource carries coordinates GeoJSON-style as
//!   `[longitude, latitude]`; they are re-paired into named fields.
//! - A distance range with `max = 0` is a schedule-ending sentinel, not an
//!   unbounded tier; it becomes `DistanceLimit::Closed`.
//!
//! Unknown fields in the responses are ignored; missing required fields are
//! decode failures, which fail the whole fetch.

use serde::Deserialize;

use dopc_core::money::Money;
use dopc_core::types::{
    Coordinate, DeliveryPricing, DistanceLimit, DistanceRange, OrderInfo, VenueData,
};

// =============================================================================
// Static Resource
// =============================================================================

/// `GET /venues/{id}/static` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticResponse {
    pub venue_raw: StaticVenueRaw,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticVenueRaw {
    pub location: WireLocation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireLocation {
    /// `[longitude, latitude]` - note the order.
    pub coordinates: [f64; 2],
}

impl StaticResponse {
    /// Re-pairs the `[lon, lat]` array into a named coordinate.
    pub fn into_location(self) -> Coordinate {
        let [longitude, latitude] = self.venue_raw.location.coordinates;
        Coordinate::new(latitude, longitude)
    }
}

// =============================================================================
// Dynamic Resource
// =============================================================================

/// `GET /venues/{id}/dynamic` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct DynamicResponse {
    pub venue_raw: DynamicVenueRaw,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DynamicVenueRaw {
    pub delivery_specs: WireDeliverySpecs,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireDeliverySpecs {
    pub order_minimum_no_surcharge: i64,
    pub delivery_pricing: WireDeliveryPricing,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireDeliveryPricing {
    pub base_price: i64,
    pub distance_ranges: Vec<WireDistanceRange>,
}

/// One fee tier as it appears on the wire, `max = 0` sentinel included.
#[derive(Debug, Clone, Deserialize)]
pub struct WireDistanceRange {
    pub min: i64,
    pub max: i64,
    pub a: i64,
    pub b: i64,
}

impl WireDistanceRange {
    /// Translates the wire tier, turning the `max = 0` sentinel into the
    /// tagged `Closed` limit.
    pub fn into_domain(self) -> DistanceRange {
        let max = if self.max == 0 {
            DistanceLimit::Closed
        } else {
            DistanceLimit::Below(self.max)
        };
        DistanceRange {
            min: self.min,
            max,
            a: Money::from_cents(self.a),
            b: self.b,
        }
    }
}

impl DynamicResponse {
    /// Normalizes the delivery specs into the core's `OrderInfo`.
    pub fn into_order_info(self) -> OrderInfo {
        let specs = self.venue_raw.delivery_specs;
        OrderInfo {
            order_minimum_no_surcharge: Money::from_cents(specs.order_minimum_no_surcharge),
            pricing: DeliveryPricing {
                base_price: Money::from_cents(specs.delivery_pricing.base_price),
                distance_ranges: specs
                    .delivery_pricing
                    .distance_ranges
                    .into_iter()
                    .map(WireDistanceRange::into_domain)
                    .collect(),
            },
        }
    }
}

// =============================================================================
// Assembly
// =============================================================================

/// Builds the read-only `VenueData` from one successful pair of reads.
pub fn assemble_venue_data(static_body: StaticResponse, dynamic_body: DynamicResponse) -> VenueData {
    VenueData {
        location: static_body.into_location(),
        order_info: dynamic_body.into_order_info(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const STATIC_BODY: &str = r#"{
        "venue_raw": {
            "location": {
                "coordinates": [24.93087, 60.17094]
            }
        }
    }"#;

    const DYNAMIC_BODY: &str = r#"{
        "venue_raw": {
            "delivery_specs": {
                "order_minimum_no_surcharge": 1000,
                "delivery_pricing": {
                    "base_price": 190,
                    "distance_ranges": [
                        { "min": 0, "max": 500, "a": 0, "b": 0 },
                        { "min": 500, "max": 1000, "a": 100, "b": 1 },
                        { "min": 1000, "max": 0, "a": 0, "b": 0 }
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn test_static_response_repairs_lon_lat_order() {
        let body: StaticResponse = serde_json::from_str(STATIC_BODY).unwrap();
        let location = body.into_location();
        // The wire array is [longitude, latitude]
        assert_eq!(location.latitude, 60.17094);
        assert_eq!(location.longitude, 24.93087);
    }

    #[test]
    fn test_dynamic_response_normalizes_specs() {
        let body: DynamicResponse = serde_json::from_str(DYNAMIC_BODY).unwrap();
        let order_info = body.into_order_info();

        assert_eq!(order_info.order_minimum_no_surcharge.cents(), 1000);
        assert_eq!(order_info.pricing.base_price.cents(), 190);
        assert_eq!(order_info.pricing.distance_ranges.len(), 3);

        let second = &order_info.pricing.distance_ranges[1];
        assert_eq!(second.min, 500);
        assert_eq!(second.max, DistanceLimit::Below(1000));
        assert_eq!(second.a.cents(), 100);
        assert_eq!(second.b, 1);
    }

    #[test]
    fn test_max_zero_becomes_closed_limit() {
        let body: DynamicResponse = serde_json::from_str(DYNAMIC_BODY).unwrap();
        let order_info = body.into_order_info();
        let last = order_info.pricing.distance_ranges.last().unwrap();
        assert_eq!(last.max, DistanceLimit::Closed);
        assert!(!last.contains(999_999));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = r#"{
            "venue_raw": {
                "name": "Venue Helsinki",
                "location": { "coordinates": [24.9, 60.2], "crs": "wgs84" }
            },
            "extra": true
        }"#;
        let parsed: StaticResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.venue_raw.location.coordinates[0], 24.9);
    }

    #[test]
    fn test_missing_required_fields_fail_to_decode() {
        let no_specs = r#"{ "venue_raw": {} }"#;
        assert!(serde_json::from_str::<DynamicResponse>(no_specs).is_err());

        let no_coordinates = r#"{ "venue_raw": { "location": {} } }"#;
        assert!(serde_json::from_str::<StaticResponse>(no_coordinates).is_err());
    }

    #[test]
    fn test_assemble_venue_data() {
        let static_body: StaticResponse = serde_json::from_str(STATIC_BODY).unwrap();
        let dynamic_body: DynamicResponse = serde_json::from_str(DYNAMIC_BODY).unwrap();
        let venue = assemble_venue_data(static_body, dynamic_body);

        assert_eq!(venue.location.latitude, 60.17094);
        assert_eq!(venue.order_info.pricing.base_price.cents(), 190);
    }
}
