//! National Weather Service client: grid lookup, period forecasts, latest
//! station observations and active alerts.
//!
//! Endpoint notes (https://www.weather.gov/documentation/services-web-api):
//! - `/points/{lat},{lon}` gives `forecast` and `observationStations` URLs
//!   plus the nearest named place in `relativeLocation`. It 404s outside the US.
//! - The stations list is ordered nearest first.
//! - Observations report metric values with WMO unit codes.

use crate::constants::FORECAST_PERIODS;
use crate::error::WeatherError;
use crate::http::HttpClient;
use crate::location::{Coordinates, StateCode};
use crate::models::{
    AlertResponse, ForecastPeriod, ForecastResponse, ObservationProperties, ObservationResponse,
    PointsProperties, PointsResponse, QuantitativeValue, StationsResponse,
};

/// One forecast period ("Tonight", "Monday", ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    pub name: String,
    pub temperature: i32,
    pub temperature_unit: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub short_forecast: String,
    pub detailed_forecast: String,
    pub humidity: Option<f64>,
    pub precipitation_chance: Option<f64>,
}

impl Period {
    /// Temperature in Fahrenheit whatever unit the period was reported in.
    pub fn temperature_f(&self) -> f64 {
        if self.temperature_unit.eq_ignore_ascii_case("C") {
            celsius_to_fahrenheit(f64::from(self.temperature))
        } else {
            f64::from(self.temperature)
        }
    }
}

impl From<ForecastPeriod> for Period {
    fn from(p: ForecastPeriod) -> Self {
        Self {
            name: p.name,
            temperature: p.temperature,
            temperature_unit: p.temperature_unit,
            wind_speed: p.wind_speed,
            wind_direction: p.wind_direction,
            short_forecast: p.short_forecast,
            detailed_forecast: p.detailed_forecast,
            humidity: p.relative_humidity.and_then(|q| q.value),
            precipitation_chance: p.probability_of_precipitation.and_then(|q| q.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// "City, ST" from the grid lookup, when the API names one.
    pub place: Option<String>,
    pub coordinates: Coordinates,
    pub periods: Vec<Period>,
}

impl Forecast {
    pub fn location(&self) -> String {
        self.place
            .clone()
            .unwrap_or_else(|| coordinate_label(self.coordinates))
    }
}

/// Latest station observation, already converted to display units.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurrentConditions {
    pub location: String,
    pub station_id: String,
    pub station_name: Option<String>,
    pub description: Option<String>,
    pub temperature_c: Option<f64>,
    pub dewpoint_f: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed_mph: Option<f64>,
    pub wind_direction_deg: Option<f64>,
    pub pressure_hpa: Option<f64>,
    pub visibility_miles: Option<f64>,
}

impl CurrentConditions {
    pub fn temperature_f(&self) -> Option<f64> {
        self.temperature_c.map(celsius_to_fahrenheit)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub event: String,
    pub area: String,
    pub severity: String,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NwsClient {
    http: HttpClient,
    base_url: String,
}

impl NwsClient {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Grid metadata for a coordinate. Failure means the point is outside
    /// NWS coverage or the lookup itself failed; the API does not let us tell
    /// those apart.
    async fn points(&self, coordinates: Coordinates) -> Result<PointsProperties, WeatherError> {
        let url = format!(
            "{}/points/{},{}",
            self.base_url,
            coordinates.latitude(),
            coordinates.longitude()
        );

        self.http
            .get_json::<PointsResponse>(&url, &[])
            .await
            .map(|points| points.properties)
            .ok_or(WeatherError::NotCovered {
                latitude: coordinates.latitude(),
                longitude: coordinates.longitude(),
            })
    }

    /// Fetches the next ten forecast periods for a coordinate.
    pub async fn forecast(&self, coordinates: Coordinates) -> Result<Forecast, WeatherError> {
        tracing::debug!("Fetching forecast for {}", coordinates);
        let points = self.points(coordinates).await?;
        let place = relative_location(&points);
        let location = place.clone().unwrap_or_else(|| coordinate_label(coordinates));

        let forecast_url = points
            .forecast
            .clone()
            .or_else(|| self.gridpoint_url(&points, "forecast"))
            .ok_or_else(|| WeatherError::ForecastUnavailable(location.clone()))?;

        let forecast = self
            .http
            .get_json::<ForecastResponse>(&forecast_url, &[])
            .await
            .ok_or_else(|| WeatherError::ForecastUnavailable(location.clone()))?;

        let periods: Vec<Period> = forecast
            .properties
            .periods
            .into_iter()
            .take(FORECAST_PERIODS)
            .map(Period::from)
            .collect();

        if periods.is_empty() {
            return Err(WeatherError::NoForecastPeriods(location));
        }

        Ok(Forecast {
            place,
            coordinates,
            periods,
        })
    }

    /// Latest observation from the station nearest to a coordinate.
    pub async fn current_conditions(
        &self,
        coordinates: Coordinates,
    ) -> Result<CurrentConditions, WeatherError> {
        tracing::debug!("Fetching current conditions for {}", coordinates);
        let points = self.points(coordinates).await?;
        let location =
            relative_location(&points).unwrap_or_else(|| coordinate_label(coordinates));

        let stations_url = points
            .observation_stations
            .clone()
            .or_else(|| self.gridpoint_url(&points, "stations"))
            .ok_or_else(|| WeatherError::NoObservationStations(location.clone()))?;

        let stations = self
            .http
            .get_json::<StationsResponse>(&stations_url, &[])
            .await
            .ok_or_else(|| WeatherError::StationsUnavailable(location.clone()))?;

        let station = stations
            .features
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::NoObservationStations(location.clone()))?
            .properties;

        let observation_url = format!(
            "{}/stations/{}/observations/latest",
            self.base_url, station.station_identifier
        );
        let observation = self
            .http
            .get_json::<ObservationResponse>(&observation_url, &[])
            .await
            .ok_or_else(|| {
                WeatherError::ObservationsUnavailable(station.station_identifier.clone())
            })?;

        Ok(convert_observation(
            location,
            station.station_identifier,
            station.name,
            observation.properties,
        ))
    }

    /// Active alerts for a state. An empty list is a normal result.
    pub async fn alerts(&self, state: &StateCode) -> Result<Vec<Alert>, WeatherError> {
        let url = format!("{}/alerts/active/area/{}", self.base_url, state);

        let response = self
            .http
            .get_json::<AlertResponse>(&url, &[])
            .await
            .ok_or_else(|| WeatherError::AlertsUnavailable(state.to_string()))?;

        Ok(response
            .features
            .into_iter()
            .map(|feature| {
                let props = feature.properties;
                Alert {
                    event: props.event.unwrap_or_else(|| "Unknown".to_string()),
                    area: props.area_desc.unwrap_or_else(|| "Unknown".to_string()),
                    severity: props.severity.unwrap_or_else(|| "Unknown".to_string()),
                    headline: props.headline,
                    description: props.description,
                    instruction: props.instruction,
                }
            })
            .collect())
    }

    fn gridpoint_url(&self, points: &PointsProperties, resource: &str) -> Option<String> {
        let grid_id = points.grid_id.as_deref()?;
        Some(format!(
            "{}/gridpoints/{}/{},{}/{}",
            self.base_url,
            grid_id,
            points.grid_x?,
            points.grid_y?,
            resource
        ))
    }
}

fn relative_location(points: &PointsProperties) -> Option<String> {
    let place = &points.relative_location.as_ref()?.properties;
    let city = place.city.as_deref().filter(|c| !c.is_empty())?;
    Some(match place.state.as_deref().filter(|s| !s.is_empty()) {
        Some(state) => format!("{}, {}", city, state),
        None => city.to_string(),
    })
}

fn coordinate_label(coordinates: Coordinates) -> String {
    format!("({}, {})", coordinates.latitude(), coordinates.longitude())
}

fn convert_observation(
    location: String,
    station_id: String,
    station_name: Option<String>,
    props: ObservationProperties,
) -> CurrentConditions {
    CurrentConditions {
        location,
        station_id,
        station_name,
        description: props.text_description.filter(|d| !d.is_empty()),
        temperature_c: props.temperature.as_ref().and_then(to_celsius),
        dewpoint_f: props
            .dewpoint
            .as_ref()
            .and_then(to_celsius)
            .map(celsius_to_fahrenheit),
        humidity: props.relative_humidity.and_then(|q| q.value),
        wind_speed_mph: props.wind_speed.as_ref().and_then(to_mph),
        wind_direction_deg: props.wind_direction.and_then(|q| q.value),
        pressure_hpa: props.barometric_pressure.as_ref().and_then(to_hpa),
        visibility_miles: props.visibility.as_ref().and_then(to_miles),
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn unit(q: &QuantitativeValue) -> &str {
    q.unit_code.as_deref().unwrap_or_default()
}

fn to_celsius(q: &QuantitativeValue) -> Option<f64> {
    let value = q.value?;
    Some(if unit(q).ends_with("degF") {
        (value - 32.0) * 5.0 / 9.0
    } else {
        value
    })
}

// NWS reports wind in km/h; some stations use m/s or knots.
fn to_mph(q: &QuantitativeValue) -> Option<f64> {
    let value = q.value?;
    let unit = unit(q);
    Some(if unit.ends_with("m_s-1") {
        value * 2.236_936
    } else if unit.ends_with("kn") || unit.ends_with("kt") {
        value * 1.150_779
    } else if unit.ends_with("mi_h-1") {
        value
    } else {
        value * 0.621_371
    })
}

fn to_hpa(q: &QuantitativeValue) -> Option<f64> {
    let value = q.value?;
    Some(if unit(q).ends_with("hPa") { value } else { value / 100.0 })
}

fn to_miles(q: &QuantitativeValue) -> Option<f64> {
    let value = q.value?;
    Some(if unit(q).ends_with("km") {
        value / 1.609_344
    } else {
        value / 1609.344
    })
}
