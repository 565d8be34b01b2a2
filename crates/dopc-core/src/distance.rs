//! # Geodesic Distance
//!
//! Great-circle distance between two coordinates via the haversine formula
//! on a sphere of radius 6 371 000 m.
//!
//! The result is rounded half away from zero (`f64::round`) to whole meters,
//! which is the rounding rule the fee schedule's tier boundaries assume.
//! Identical coordinates yield exactly 0. Inputs arrive pre-validated from
//! the validation module and are not range-checked again here; any finite
//! pair of coordinates produces a defined output.

use crate::types::Coordinate;

/// Mean Earth radius in meters used by the haversine computation.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Straight-line (great-circle) distance between two points, in whole meters.
pub fn distance_meters(from: Coordinate, to: Coordinate) -> i64 {
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.latitude.to_radians().cos()
            * to.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_METERS * c).round() as i64
}

// =============================================================================
// Unit Tests
// =============================================================================
