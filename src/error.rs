//! Error taxonomy for tool invocations.
//!
//! Every variant renders as the user-facing text returned by a tool, so the
//! `Display` messages are written for the person reading the tool result.

use thiserror::Error;

/// Which of two compared locations failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    First,
    Second,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Coarse classification used to tell bad input, missing data and upstream
/// outages apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    UpstreamUnavailable,
}

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Error: '{0}' is not a valid US state code. Please use a 2-letter code (e.g., CA, NY, TX).")]
    InvalidStateCode(String),

    #[error("Error: Invalid coordinates ({latitude}, {longitude}). Latitude must be between -90 and 90, longitude between -180 and 180.")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("Error: Location must not be empty. Use a place name or 'lat,lon' (e.g., '40.7128,-74.0060').")]
    EmptyLocation,

    #[error("Error: Could not find coordinates for '{0}'. Please check the place name or use 'lat,lon' format (e.g., '40.7128,-74.0060').")]
    LocationNotFound(String),

    #[error("Geocoding lookup failed for '{0}'. The geocoding service may be unavailable.")]
    GeocodingUnavailable(String),

    #[error("Coordinates ({latitude}, {longitude}) are not covered by the National Weather Service (US locations only), or the grid lookup failed.")]
    NotCovered { latitude: f64, longitude: f64 },

    #[error("Forecast unavailable for {0}. The forecast service did not respond.")]
    ForecastUnavailable(String),

    #[error("The forecast for {0} contains no periods.")]
    NoForecastPeriods(String),

    #[error("Unable to look up observation stations for {0}. The station service may be unavailable.")]
    StationsUnavailable(String),

    #[error("No observation stations found for {0}.")]
    NoObservationStations(String),

    #[error("Observations unavailable: no recent observation from station {0}.")]
    ObservationsUnavailable(String),

    #[error("Unable to fetch alerts for {0}. The alerts service may be unavailable.")]
    AlertsUnavailable(String),

    #[error("Comparison failed for the {position} location '{location}': {source}")]
    Comparison {
        position: Position,
        location: String,
        #[source]
        source: Box<WeatherError>,
    },
}

impl WeatherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidStateCode(_) | Self::InvalidCoordinates { .. } | Self::EmptyLocation => {
                ErrorKind::Validation
            }
            Self::LocationNotFound(_)
            | Self::NoForecastPeriods(_)
            | Self::NoObservationStations(_)
            | Self::ObservationsUnavailable(_) => ErrorKind::NotFound,
            Self::GeocodingUnavailable(_)
            | Self::NotCovered { .. }
            | Self::ForecastUnavailable(_)
            | Self::StationsUnavailable(_)
            | Self::AlertsUnavailable(_) => ErrorKind::UpstreamUnavailable,
            Self::Comparison { source, .. } => source.kind(),
        }
    }

    /// Wraps an error raised while handling one side of a comparison.
    pub fn for_location(self, position: Position, location: &str) -> Self {
        Self::Comparison {
            position,
            location: location.to_string(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(WeatherError::InvalidStateCode("ZZ".into()).kind(), ErrorKind::Validation);
        assert_eq!(WeatherError::EmptyLocation.kind(), ErrorKind::Validation);
        assert_eq!(WeatherError::LocationNotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(
            WeatherError::GeocodingUnavailable("x".into()).kind(),
            ErrorKind::UpstreamUnavailable
        );
        assert_eq!(
            WeatherError::NotCovered { latitude: 48.8, longitude: 2.3 }.kind(),
            ErrorKind::UpstreamUnavailable
        );
    }

    #[test]
    fn test_comparison_error_names_location() {
        let err = WeatherError::LocationNotFound("Atlantis".into())
            .for_location(Position::Second, "Atlantis");

        assert_eq!(err.kind(), ErrorKind::NotFound);
        let message = err.to_string();
        assert!(message.contains("second location 'Atlantis'"), "{message}");
        assert!(message.contains("Could not find coordinates"), "{message}");
    }
}
