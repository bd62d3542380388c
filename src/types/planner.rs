//! Planner configuration and the text-to-route pipeline.
//!
//! A [`PlannerConfig`] holds the start point and the strategy. Callers
//! such as a UI load it from their own settings (any `serde` format)
//! and hand it raw CSV text or already-parsed destinations.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::location::{Coordinate, LocationRecord};
use crate::parser;
use crate::route_point::RoutePoint;
use crate::router::engine::{build_route, Strategy};
use crate::samples::JAKARTA;

/// Options for building routes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    /// Where every route starts (default: central Jakarta)
    #[serde(default = "default_start")]
    pub start: Coordinate,

    /// How destinations are ordered (default: nearest neighbor)
    #[serde(default)]
    pub strategy: Strategy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            strategy: Strategy::default(),
        }
    }
}

impl PlannerConfig {
    pub fn new(start: Coordinate, strategy: Strategy) -> Self {
        Self { start, strategy }
    }

    /// Orders already-parsed destinations.
    pub fn plan(&self, destinations: &[LocationRecord]) -> Result<Vec<RoutePoint>> {
        build_route(&self.start, destinations, self.strategy)
    }

    /// Parses CSV text and orders the resulting destinations.
    ///
    /// Fails on the first malformed line or invalid coordinate; nothing
    /// is returned in that case.
    pub fn plan_csv(&self, text: &str) -> Result<Vec<RoutePoint>> {
        info!("[1/2] Parsing destinations...");
        let destinations = parser::parse(text)?;
        info!("[2/2] Building the route...");
        self.plan(&destinations)
    }
}

fn default_start() -> Coordinate {
    JAKARTA
}
