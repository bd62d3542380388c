//! Definition of the [`PlannerError`] type.

use thiserror::Error;

use super::location::Coordinate;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, PlannerError>;

/// Errors returned by the planner. Any error aborts the whole call;
/// nothing is partially returned.
#[derive(Debug, Error, PartialEq)]
pub enum PlannerError {
    /// A coordinate is `NaN` or outside the valid latitude/longitude
    /// ranges.
    #[error("invalid coordinates provided: ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// A line of CSV input could not be turned into a location.
    #[error("failed to parse CSV on line {line}: {cause}")]
    Parse { line: usize, cause: ParseFailure },

    /// The route could not be written out.
    #[error("failed to export route: {0}")]
    Export(String),
}

impl PlannerError {
    pub(crate) fn invalid_coordinate(coordinate: &Coordinate) -> Self {
        PlannerError::InvalidCoordinate {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }
}

impl From<csv::Error> for PlannerError {
    fn from(e: csv::Error) -> Self {
        PlannerError::Export(e.to_string())
    }
}

/// Why a CSV line was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// Latitude or longitude is missing or not a number.
    #[error("invalid coordinate values")]
    InvalidCoordinateValues,

    /// Latitude or longitude is a number outside its valid range.
    #[error("coordinate out of range")]
    CoordinateOutOfRange,
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_parse_error_message_carries_cause() {
        let e = PlannerError::Parse {
            line: 3,
            cause: ParseFailure::CoordinateOutOfRange,
        };
        assert_eq!(
            e.to_string(),
            "failed to parse CSV on line 3: coordinate out of range"
        );
    }

    #[test]
    fn test_invalid_coordinate_message() {
        let e = PlannerError::invalid_coordinate(&Coordinate::new(91.0, 10.5));
        assert_eq!(e.to_string(), "invalid coordinates provided: (91, 10.5)");
    }
}
