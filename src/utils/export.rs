//! Writes a route out as a CSV file.
//!
//! The layout matches the "Download CSV" output of the route planner
//! page: a header row, then one row per point with the order, the
//! coordinate to six decimals and the distance in kilometers to three
//! decimals. Rows are separated by `\n` with no trailing newline.

use crate::error::{PlannerError, Result};
use crate::route_point::RoutePoint;

/// Header row of the exported file.
pub const HEADER: [&str; 4] = ["No", "Latitude", "Longitude", "Jarak (km)"];

const COORDINATE_DECIMALS: usize = 6;
const DISTANCE_DECIMALS: usize = 3;

/// Exports `route` as CSV text.
pub fn to_csv(route: &[RoutePoint]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for point in route {
        writer.write_record(&[
            point.order.to_string(),
            format!("{:.*}", COORDINATE_DECIMALS, point.latitude()),
            format!("{:.*}", COORDINATE_DECIMALS, point.longitude()),
            format!("{:.*}", DISTANCE_DECIMALS, point.distance),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PlannerError::Export(e.to_string()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| PlannerError::Export(e.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }

    debug!("Exported {} route points", route.len());
    Ok(text)
}
