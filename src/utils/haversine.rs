//! Great-circle distance between two coordinates.

use crate::error::{PlannerError, Result};
use crate::location::Coordinate;

/// Mean radius of the Earth.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the haversine distance in kilometers between two
/// coordinates.
///
/// # Errors
/// [`PlannerError::InvalidCoordinate`] if either coordinate fails
/// validation.
pub fn distance(a: &Coordinate, b: &Coordinate) -> Result<f64> {
    for coordinate in [a, b] {
        if !coordinate.is_valid() {
            return Err(PlannerError::invalid_coordinate(coordinate));
        }
    }

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Ok(EARTH_RADIUS_KM * c)
}

#[cfg(test)]
mod haversine_tests {
    use super::*;
    use crate::generator::generate_locations_near;
    use crate::samples::JAKARTA;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_zero_for_same_point() {
        for c in [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(90.0, 180.0),
            Coordinate::new(-90.0, -180.0),
            JAKARTA,
        ] {
            assert_eq!(distance(&c, &c).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_known_distance() {
        // One degree of arc along the equator.
        let d = distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 1.0)).unwrap();
        assert!((d - 111.194_926_644_558_73).abs() < 1e-6, "got {d}");

        // Pole to pole is half the circumference.
        let d = distance(&Coordinate::new(90.0, 0.0), &Coordinate::new(-90.0, 0.0)).unwrap();
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_symmetric() {
        let points = generate_locations_near(&JAKARTA, 50.0, 30);
        for a in &points {
            for b in &points {
                let ab = distance(&a.coordinate, &b.coordinate).unwrap();
                let ba = distance(&b.coordinate, &a.coordinate).unwrap();
                assert!((ab - ba).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let points = generate_locations_near(&Coordinate::new(37.7749, -122.4194), 500.0, 15);
        for a in &points {
            for b in &points {
                for c in &points {
                    let ab = distance(&a.coordinate, &b.coordinate).unwrap();
                    let bc = distance(&b.coordinate, &c.coordinate).unwrap();
                    let ac = distance(&a.coordinate, &c.coordinate).unwrap();
                    assert!(ac <= ab + bc + 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_invalid_coordinate() {
        let valid = Coordinate::new(0.0, 0.0);
        let invalid = Coordinate::new(91.0, 0.0);
        assert_eq!(
            distance(&valid, &invalid),
            Err(PlannerError::InvalidCoordinate {
                latitude: 91.0,
                longitude: 0.0
            })
        );
        assert!(distance(&invalid, &valid).is_err());
        assert!(distance(&Coordinate::new(f64::NAN, 0.0), &valid).is_err());
    }
}
