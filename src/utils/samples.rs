//! Built-in sample data around Jakarta.

use once_cell::sync::Lazy;

use crate::location::{Coordinate, LocationRecord};

/// Default start point of the planner.
pub static JAKARTA: Coordinate = Coordinate::new(-6.2088, 106.8456);

/// Five destinations around central Jakarta. The first one sits on
/// [`JAKARTA`] itself.
pub static SAMPLE_DESTINATIONS: Lazy<Vec<LocationRecord>> = Lazy::new(|| {
    vec![
        LocationRecord::new(-6.2088, 106.8456),
        LocationRecord::new(-6.1751, 106.8650),
        LocationRecord::new(-6.2382, 106.8255),
        LocationRecord::new(-6.1935, 106.8228),
        LocationRecord::new(-6.2241, 106.8451),
    ]
});
