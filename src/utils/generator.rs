//! Random location generator for demos and tests.

use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::haversine::EARTH_RADIUS_KM;
use crate::location::{Coordinate, LocationRecord};

/// Generates `capacity` unnamed locations within `radius_km` of
/// `center`.
///
/// The radius is capped at half the Earth's circumference; a negative
/// or `NaN` radius puts every location on the center.
///
/// Each location is placed at a uniformly random bearing and a
/// uniformly random great-circle distance from the center, so every
/// generated coordinate is valid even near the poles or the
/// antimeridian.
pub fn generate_locations_near(
    center: &Coordinate,
    radius_km: f64,
    capacity: usize,
) -> Vec<LocationRecord> {
    // f64::max maps NaN to the other operand
    let radius_km = radius_km.max(0.0).min(PI * EARTH_RADIUS_KM);
    let mut rng = rand::thread_rng();
    let mut locations = Vec::with_capacity(capacity);
    for _ in 0..capacity {
        let bearing = rng.gen_range(0.0..TAU);
        let arc = rng.gen_range(0.0..=radius_km) / EARTH_RADIUS_KM;
        let c = destination(center, bearing, arc);
        locations.push(LocationRecord::new(c.latitude, c.longitude));
    }
    locations
}

/// Point reached by travelling `arc` radians from `origin` along the
/// initial `bearing` (radians, clockwise from north).
fn destination(origin: &Coordinate, bearing: f64, arc: f64) -> Coordinate {
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();

    let lat2 = (lat1.sin() * arc.cos() + lat1.cos() * arc.sin() * bearing.cos())
        .clamp(-1.0, 1.0)
        .asin();
    let lon2 = lon1
        + (bearing.sin() * arc.sin() * lat1.cos()).atan2(arc.cos() - lat1.sin() * lat2.sin());

    // normalize into [-180, 180]
    let longitude = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    Coordinate::new(lat2.to_degrees().clamp(-90.0, 90.0), longitude)
}
