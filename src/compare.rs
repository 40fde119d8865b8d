use crate::error::{Position, WeatherError};
use crate::geocode::Geocoder;
use crate::location::{LocationQuery, ResolvedLocation};
use crate::nws::{Forecast, NwsClient, Period};

/// One side of a comparison: how the input resolved plus its forecast.
/// Always holds at least one forecast period.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparedLocation {
    query: String,
    resolved: Option<ResolvedLocation>,
    forecast: Forecast,
}

impl ComparedLocation {
    pub fn new(
        query: &str,
        resolved: Option<ResolvedLocation>,
        forecast: Forecast,
    ) -> Result<Self, WeatherError> {
        if forecast.periods.is_empty() {
            return Err(WeatherError::NoForecastPeriods(forecast.location()));
        }
        Ok(Self {
            query: query.trim().to_string(),
            resolved,
            forecast,
        })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn resolved(&self) -> Option<&ResolvedLocation> {
        self.resolved.as_ref()
    }

    pub fn forecast(&self) -> &Forecast {
        &self.forecast
    }

    /// NWS place name, falling back to the geocoded label.
    pub fn label(&self) -> String {
        match (&self.forecast.place, &self.resolved) {
            (Some(place), _) => place.clone(),
            (None, Some(resolved)) => resolved.label.clone(),
            (None, None) => self.forecast.location(),
        }
    }

    pub fn first_period(&self) -> &Period {
        // non-empty, checked in `new`
        &self.forecast.periods[0]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    first: ComparedLocation,
    second: ComparedLocation,
    temperature_difference: f64,
}

impl Comparison {
    pub fn new(first: ComparedLocation, second: ComparedLocation) -> Self {
        let temperature_difference =
            first.first_period().temperature_f() - second.first_period().temperature_f();
        Self {
            first,
            second,
            temperature_difference,
        }
    }

    pub fn first(&self) -> &ComparedLocation {
        &self.first
    }

    pub fn second(&self) -> &ComparedLocation {
        &self.second
    }

    /// First-period temperature of `first` minus that of `second`, in °F.
    pub fn temperature_difference(&self) -> f64 {
        self.temperature_difference
    }
}

/// Resolves and fetches each location in turn (first fully, then second)
/// and derives the temperature delta from the first forecast period.
pub async fn compare(
    geocoder: &Geocoder,
    nws: &NwsClient,
    location1: &str,
    location2: &str,
) -> Result<Comparison, WeatherError> {
    let first = fetch_side(geocoder, nws, location1)
        .await
        .map_err(|e| e.for_location(Position::First, location1))?;
    let second = fetch_side(geocoder, nws, location2)
        .await
        .map_err(|e| e.for_location(Position::Second, location2))?;

    Ok(Comparison::new(first, second))
}

async fn fetch_side(
    geocoder: &Geocoder,
    nws: &NwsClient,
    input: &str,
) -> Result<ComparedLocation, WeatherError> {
    let (coordinates, resolved) = match LocationQuery::parse(input)? {
        LocationQuery::Coordinates(coordinates) => (coordinates, None),
        LocationQuery::Name(name) => {
            let resolved = geocoder.resolve(&name).await?;
            (resolved.coordinates, Some(resolved))
        }
    };

    let forecast = nws.forecast(coordinates).await?;
    ComparedLocation::new(input, resolved, forecast)
}
