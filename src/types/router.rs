//! The core of the planner library.
//!
//! The engine module orders a set of destinations into a route that
//! starts from a fixed point. Two strategies are provided, selected
//! through [`Strategy`](engine::Strategy).

/// The route engine module.
pub mod engine {
    use ordered_float::OrderedFloat;
    use serde::{Deserialize, Serialize};

    use crate::{
        error::{PlannerError, Result},
        haversine,
        location::{AsCoordinate, Coordinate, LocationRecord},
        route_point::RoutePoint,
    };

    /// Route construction strategies.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Strategy {
        /// Greedy chaining: always travel next to the closest unvisited
        /// destination. `distance` on each point is the cumulative
        /// distance travelled from the start through that point.
        #[default]
        NearestNeighbor,

        /// Sort destinations by their direct distance from the start.
        /// `distance` on each point is that direct distance.
        DistanceSort,
    }

    /// Builds a route from `start` through every destination.
    ///
    /// The input is never mutated and no state is kept between calls.
    /// Both strategies are deterministic: on equal distances the
    /// destination that comes first in `destinations` wins.
    ///
    /// # Errors
    /// [`PlannerError::InvalidCoordinate`] if `start` or any destination
    /// fails validation. No partial route is returned.
    ///
    /// # Time Complexity
    /// *O*(*n^2*) distance evaluations for
    /// [`Strategy::NearestNeighbor`], *O*(*n* log *n*) for
    /// [`Strategy::DistanceSort`].
    pub fn build_route(
        start: &Coordinate,
        destinations: &[LocationRecord],
        strategy: Strategy,
    ) -> Result<Vec<RoutePoint>> {
        debug!(
            "Building {:?} route from {:?} through {} destinations",
            strategy,
            start,
            destinations.len()
        );
        validate(start, destinations)?;

        let route = match strategy {
            Strategy::NearestNeighbor => nearest_neighbor(start, destinations)?,
            Strategy::DistanceSort => distance_sort(start, destinations)?,
        };

        info!("Built {:?} route with {} points", strategy, route.len());
        Ok(route)
    }

    /// Total great-circle length of travelling from `start` through the
    /// points of `route` in order.
    ///
    /// For a [`Strategy::NearestNeighbor`] route this equals the
    /// `distance` of the last point.
    pub fn travel_distance(start: &Coordinate, route: &[impl AsCoordinate]) -> Result<f64> {
        let mut current = start;
        let mut total = 0.0;
        for point in route {
            total += haversine::distance(current, point.as_coordinate())?;
            current = point.as_coordinate();
        }
        Ok(total)
    }

    //---------------------------------------------------------------
    // Private functions
    //---------------------------------------------------------------

    fn validate(start: &Coordinate, destinations: &[LocationRecord]) -> Result<()> {
        if let Some(invalid) = std::iter::once(start)
            .chain(destinations.iter().map(AsCoordinate::as_coordinate))
            .find(|c| !c.is_valid())
        {
            error!("Invalid coordinate in route input: {:?}", invalid);
            return Err(PlannerError::invalid_coordinate(invalid));
        }
        Ok(())
    }

    /// See [`Strategy::NearestNeighbor`].
    fn nearest_neighbor(
        start: &Coordinate,
        destinations: &[LocationRecord],
    ) -> Result<Vec<RoutePoint>> {
        // `Vec::remove` keeps the remaining order, which the tie-break
        // relies on.
        let mut unvisited: Vec<&LocationRecord> = destinations.iter().collect();
        let mut route = Vec::with_capacity(destinations.len());
        let mut current = *start;
        let mut total_distance = 0.0;

        while !unvisited.is_empty() {
            let mut nearest_index = 0;
            let mut shortest = haversine::distance(&current, &unvisited[0].coordinate)?;
            for (index, candidate) in unvisited.iter().enumerate().skip(1) {
                let distance = haversine::distance(&current, &candidate.coordinate)?;
                if distance < shortest {
                    shortest = distance;
                    nearest_index = index;
                }
            }

            let next = unvisited.remove(nearest_index);
            total_distance += shortest;
            debug!(
                "Stop {}: {:?} (leg {} km, total {} km)",
                route.len() + 1,
                next.coordinate,
                shortest,
                total_distance
            );

            route.push(RoutePoint::new(next.clone(), route.len() + 1, total_distance));
            current = next.coordinate;
        }

        Ok(route)
    }

    /// See [`Strategy::DistanceSort`].
    fn distance_sort(
        start: &Coordinate,
        destinations: &[LocationRecord],
    ) -> Result<Vec<RoutePoint>> {
        let mut by_distance = destinations
            .iter()
            .map(|d| -> Result<_> {
                Ok((OrderedFloat(haversine::distance(start, &d.coordinate)?), d))
            })
            .collect::<Result<Vec<_>>>()?;
        // stable, so ties keep input order
        by_distance.sort_by_key(|(distance, _)| *distance);

        Ok(by_distance
            .into_iter()
            .enumerate()
            .map(|(index, (distance, d))| {
                RoutePoint::new(d.clone(), index + 1, distance.into_inner())
            })
            .collect())
    }
}
