//! Definition of the [`RoutePoint`] type.

use serde::{Deserialize, Serialize};

use super::location::{AsCoordinate, Coordinate, LocationRecord};

/// A destination placed in a route.
///
/// What `distance` means depends on the strategy that produced the
/// route. See [`Strategy`](crate::router::engine::Strategy).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    #[serde(flatten)]
    pub location: LocationRecord,

    /// Kilometers.
    pub distance: f64,

    /// 1-based rank of the point in the route.
    pub order: usize,
}

impl RoutePoint {
    pub fn new(location: LocationRecord, order: usize, distance: f64) -> Self {
        RoutePoint {
            location,
            distance,
            order,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.location.coordinate.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.location.coordinate.longitude
    }
}

impl AsCoordinate for RoutePoint {
    fn as_coordinate(&self) -> &Coordinate {
        &self.location.coordinate
    }
}
