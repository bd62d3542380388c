//! Parses delimited text into [`LocationRecord`]s.
//!
//! Each line has the form `latitude,longitude[,name[,address]]`. There
//! is no header row and no quoting: fields are split on every comma and
//! trimmed of surrounding whitespace. Parsing is all-or-nothing; the
//! first malformed line aborts with a [`PlannerError::Parse`].

use crate::error::{ParseFailure, PlannerError, Result};
use crate::location::{Coordinate, LocationRecord};

const DELIMITER: char = ',';
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses CSV text into location records.
///
/// Empty (or whitespace-only) input yields an empty vector. A leading
/// byte-order mark is ignored.
pub fn parse(text: &str) -> Result<Vec<LocationRecord>> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text).trim();
    if text.is_empty() {
        debug!("CSV input is empty");
        return Ok(Vec::new());
    }

    let locations = text
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            parse_line(line).map_err(|cause| {
                warn!("Rejecting CSV line {}: {} ({:?})", index + 1, cause, line);
                PlannerError::Parse {
                    line: index + 1,
                    cause,
                }
            })
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Parsed {} locations from CSV", locations.len());
    Ok(locations)
}

/// Parses a single line. Fields past the fourth are ignored.
fn parse_line(line: &str) -> std::result::Result<LocationRecord, ParseFailure> {
    let mut fields = line.split(DELIMITER).map(str::trim);

    let latitude = parse_number(fields.next())?;
    let longitude = parse_number(fields.next())?;
    let coordinate = Coordinate::new(latitude, longitude);
    if !coordinate.is_valid() {
        return Err(ParseFailure::CoordinateOutOfRange);
    }

    Ok(LocationRecord {
        coordinate,
        name: fields.next().map(str::to_owned),
        address: fields.next().map(str::to_owned),
    })
}

/// Infinities pass through here and are caught by the range check.
fn parse_number(field: Option<&str>) -> std::result::Result<f64, ParseFailure> {
    field
        .and_then(|f| f.parse::<f64>().ok())
        .filter(|value| !value.is_nan())
        .ok_or(ParseFailure::InvalidCoordinateValues)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
