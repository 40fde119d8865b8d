use std::fmt;
use std::str::FromStr;

use crate::constants::US_STATE_CODES;
use crate::error::WeatherError;

/// A latitude/longitude pair that has passed range validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Rejects anything outside [-90, 90] x [-180, 180]; values are never clamped.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        let in_range = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
        if !in_range {
            return Err(WeatherError::InvalidCoordinates { latitude, longitude });
        }
        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Two-letter US postal code accepted by the alerts endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCode(String);

impl StateCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StateCode {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        if US_STATE_CODES.contains(&code.as_str()) {
            Ok(Self(code))
        } else {
            Err(WeatherError::InvalidStateCode(code))
        }
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Location input to the comparison tool: either a literal coordinate pair
/// or a place name that still needs geocoding.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    Coordinates(Coordinates),
    Name(String),
}

impl LocationQuery {
    /// Only a string of exactly two comma-separated numbers is treated as
    /// coordinates; "Portland, OR" and friends are place names. A numeric pair
    /// outside the valid range is rejected instead of being geocoded.
    pub fn parse(input: &str) -> Result<Self, WeatherError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(WeatherError::EmptyLocation);
        }

        let parts: Vec<&str> = input.split(',').collect();
        if let [lat, lon] = parts.as_slice() {
            if let (Ok(lat), Ok(lon)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
                return Coordinates::new(lat, lon).map(Self::Coordinates);
            }
        }

        Ok(Self::Name(input.to_string()))
    }
}

/// Coordinates plus the label used to present them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,
    pub label: String,
}
