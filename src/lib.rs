//! Route Planning Library.
//! Orders a set of geographic destinations into a visiting route that
//! starts from a fixed point, using great-circle distance.
//!
//! ```no_run
//! use route_planner::{PlannerConfig, Strategy};
//!
//! let config = PlannerConfig::default();
//! let route = config.plan_csv("-6.1751,106.8650,Toyib Travel\n-6.2382,106.8255")?;
//! let csv = route_planner::export::to_csv(&route)?;
//! # let _ = (csv, Strategy::DistanceSort);
//! # Ok::<(), route_planner::PlannerError>(())
//! ```

#[macro_use]
extern crate log;

mod types {
    pub mod error;
    pub mod location;
    pub mod planner;
    pub mod route_point;
    pub mod router;
}

mod utils {
    pub mod export;
    pub mod generator;
    pub mod haversine;
    pub mod parser;
    pub mod samples;
}

pub use types::{error, location, planner, route_point, router};
pub use utils::{export, generator, haversine, parser, samples};

pub use error::{ParseFailure, PlannerError, Result};
pub use location::{is_valid, AsCoordinate, Coordinate, LocationRecord};
pub use parser::parse;
pub use planner::PlannerConfig;
pub use route_point::RoutePoint;
pub use router::engine::{build_route, travel_distance, Strategy};
