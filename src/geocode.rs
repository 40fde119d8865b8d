//! Forward geocoding: place name to coordinates and a display label.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use crate::error::WeatherError;
use crate::http::HttpClient;
use crate::location::{Coordinates, ResolvedLocation};
use crate::models::{GeocodingResponse, GeocodingResult};

#[derive(Debug, Clone)]
pub struct Geocoder {
    http: HttpClient,
    base_url: String,
}

impl Geocoder {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Resolves `name` to the first match the geocoding service returns.
    /// Ambiguous names ("Springfield") are not disambiguated.
    pub async fn resolve(&self, name: &str) -> Result<ResolvedLocation, WeatherError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WeatherError::EmptyLocation);
        }

        let response: GeocodingResponse = self
            .http
            .get_json(
                &self.base_url,
                &[("name", name), ("count", "1"), ("language", "en"), ("format", "json")],
            )
            .await
            .ok_or_else(|| WeatherError::GeocodingUnavailable(name.to_string()))?;

        let first = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(name.to_string()))?;

        let coordinates = Coordinates::new(first.latitude, first.longitude)?;
        let label = compose_label(&first);
        tracing::info!("Geocoded '{}' to {} ({})", name, label, coordinates);

        Ok(ResolvedLocation { coordinates, label })
    }
}

/// "Name, Region, Country", skipping parts that are missing or repeat the name.
fn compose_label(result: &GeocodingResult) -> String {
    let mut parts = vec![result.name.as_str()];
    for extra in [&result.admin1, &result.country].into_iter().flatten() {
        if !extra.is_empty() && !parts.contains(&extra.as_str()) {
            parts.push(extra.as_str());
        }
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, admin1: Option<&str>, country: Option<&str>) -> GeocodingResult {
        GeocodingResult {
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            admin1: admin1.map(str::to_string),
            country: country.map(str::to_string),
        }
    }

    #[test]
    fn test_label_with_all_parts() {
        let r = result("Denver", Some("Colorado"), Some("United States"));
        assert_eq!(compose_label(&r), "Denver, Colorado, United States");
    }

    #[test]
    fn test_label_skips_missing_and_duplicate_parts() {
        assert_eq!(compose_label(&result("Singapore", Some("Singapore"), None)), "Singapore");
        assert_eq!(compose_label(&result("Nowhere", None, Some(""))), "Nowhere");
    }
}
