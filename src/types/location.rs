//! Struct definitions and implementations for [`Coordinate`] and
//! [`LocationRecord`].
//!
//! A `Coordinate` is the bare geographic position. A `LocationRecord`
//! is a coordinate that came from user input and may carry a name and
//! an address.

use serde::{Deserialize, Serialize};

/// Valid latitude range in degrees, inclusive on both ends.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitude range in degrees, inclusive on both ends.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// A [`Coordinate`] is a value type that represents a point on the
/// globe in decimal degrees.
///
/// Constructing a `Coordinate` does not validate it. Use
/// [`Coordinate::is_valid`] (or [`is_valid`]) before relying on the
/// values; the distance calculator and the route builder do so and
/// reject invalid input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate. No validation is done here.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Returns true if both values are numbers within the inclusive
    /// latitude and longitude ranges.
    ///
    /// `NaN` compares false against every bound, so it is rejected
    /// without a separate check.
    pub fn is_valid(&self) -> bool {
        (LATITUDE_RANGE.0..=LATITUDE_RANGE.1).contains(&self.latitude)
            && (LONGITUDE_RANGE.0..=LONGITUDE_RANGE.1).contains(&self.longitude)
    }
}

/// Validates a coordinate. See [`Coordinate::is_valid`].
pub fn is_valid(coordinate: &Coordinate) -> bool {
    coordinate.is_valid()
}

/// A destination read from user input.
///
/// `name` and `address` are [`None`] when the input did not provide
/// them. A field that was provided but left blank is `Some("")`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(flatten)]
    pub coordinate: Coordinate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl LocationRecord {
    /// Creates a record with no name and no address.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        LocationRecord {
            coordinate: Coordinate::new(latitude, longitude),
            name: None,
            address: None,
        }
    }

    /// Sets the name of the record.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the address of the record.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Rust has no inheritance, so "coordinate-like" objects implement
/// this trait to be handed to functions that only care about the
/// position.
pub trait AsCoordinate {
    /// Returns the position of the object.
    fn as_coordinate(&self) -> &Coordinate;

    /// Validates the position of the object.
    fn has_valid_coordinate(&self) -> bool {
        self.as_coordinate().is_valid()
    }
}

impl AsCoordinate for Coordinate {
    fn as_coordinate(&self) -> &Coordinate {
        self
    }
}

impl AsCoordinate for LocationRecord {
    fn as_coordinate(&self) -> &Coordinate {
        &self.coordinate
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert!(!is_valid(&Coordinate::new(91.0, 0.0)));
        assert!(!is_valid(&Coordinate::new(-91.0, 0.0)));
        assert!(!is_valid(&Coordinate::new(0.0, 181.0)));
        assert!(!is_valid(&Coordinate::new(0.0, -181.0)));
    }

    #[test]
    fn test_accepts_boundaries() {
        assert!(is_valid(&Coordinate::new(90.0, 180.0)));
        assert!(is_valid(&Coordinate::new(-90.0, -180.0)));
        assert!(is_valid(&Coordinate::new(90.0, -180.0)));
        assert!(is_valid(&Coordinate::new(-90.0, 180.0)));
        assert!(is_valid(&Coordinate::new(-6.2088, 106.8456)));
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert!(!is_valid(&Coordinate::new(f64::NAN, 0.0)));
        assert!(!is_valid(&Coordinate::new(0.0, f64::NAN)));
        assert!(!is_valid(&Coordinate::new(f64::INFINITY, 0.0)));
        assert!(!is_valid(&Coordinate::new(0.0, f64::NEG_INFINITY)));
    }

    #[test]
    fn test_record_builder_keeps_unset_fields() {
        let record = LocationRecord::new(-6.1751, 106.8650).with_name("Toyib Travel");
        assert_eq!(record.name.as_deref(), Some("Toyib Travel"));
        assert_eq!(record.address, None);
        assert!(record.has_valid_coordinate());
    }

    #[test]
    fn test_serialized_shape() {
        let record = LocationRecord::new(-6.1751, 106.865).with_address("");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "lat": -6.1751, "lng": 106.865, "address": "" })
        );
    }
}
