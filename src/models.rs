use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Open-Meteo Geocoding API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub admin1: Option<String>,
    pub country: Option<String>,
}

// ============================================================================
// National Weather Service API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AlertResponse {
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub properties: AlertProperties,
}

#[derive(Debug, Deserialize)]
pub struct AlertProperties {
    pub event: Option<String>,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
    pub severity: Option<String>,
    #[serde(rename = "areaDesc")]
    pub area_desc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PointsResponse {
    pub properties: PointsProperties,
}

#[derive(Debug, Deserialize)]
pub struct PointsProperties {
    #[serde(rename = "gridId")]
    pub grid_id: Option<String>,
    #[serde(rename = "gridX")]
    pub grid_x: Option<i32>,
    #[serde(rename = "gridY")]
    pub grid_y: Option<i32>,
    pub forecast: Option<String>,
    #[serde(rename = "observationStations")]
    pub observation_stations: Option<String>,
    #[serde(rename = "relativeLocation")]
    pub relative_location: Option<RelativeLocation>,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocation {
    pub properties: RelativeLocationProperties,
}

#[derive(Debug, Deserialize)]
pub struct RelativeLocationProperties {
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub properties: ForecastProperties,
}

#[derive(Debug, Deserialize)]
pub struct ForecastProperties {
    pub periods: Vec<ForecastPeriod>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastPeriod {
    pub name: String,
    pub temperature: i32,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed", default)]
    pub wind_speed: String,
    #[serde(rename = "windDirection", default)]
    pub wind_direction: String,
    #[serde(rename = "shortForecast", default)]
    pub short_forecast: String,
    #[serde(rename = "detailedForecast", default)]
    pub detailed_forecast: String,
    #[serde(rename = "relativeHumidity")]
    pub relative_humidity: Option<QuantitativeValue>,
    #[serde(rename = "probabilityOfPrecipitation")]
    pub probability_of_precipitation: Option<QuantitativeValue>,
}

/// NWS measurement: a nullable value tagged with a WMO unit code such as
/// `wmoUnit:degC` or `wmoUnit:km_h-1`.
#[derive(Debug, Deserialize)]
pub struct QuantitativeValue {
    pub value: Option<f64>,
    #[serde(rename = "unitCode")]
    pub unit_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StationsResponse {
    pub features: Vec<StationFeature>,
}

#[derive(Debug, Deserialize)]
pub struct StationFeature {
    pub properties: StationProperties,
}

#[derive(Debug, Deserialize)]
pub struct StationProperties {
    #[serde(rename = "stationIdentifier")]
    pub station_identifier: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ObservationResponse {
    pub properties: ObservationProperties,
}

#[derive(Debug, Deserialize)]
pub struct ObservationProperties {
    #[serde(rename = "textDescription")]
    pub text_description: Option<String>,
    pub temperature: Option<QuantitativeValue>,
    pub dewpoint: Option<QuantitativeValue>,
    #[serde(rename = "relativeHumidity")]
    pub relative_humidity: Option<QuantitativeValue>,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<QuantitativeValue>,
    #[serde(rename = "windDirection")]
    pub wind_direction: Option<QuantitativeValue>,
    #[serde(rename = "barometricPressure")]
    pub barometric_pressure: Option<QuantitativeValue>,
    pub visibility: Option<QuantitativeValue>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    #[schemars(description = "Two-letter US state code (e.g. CA, NY, TX)")]
    pub state: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CoordinatesRequest {
    #[schemars(description = "Latitude of the location (-90 to 90)")]
    pub latitude: f64,
    #[schemars(description = "Longitude of the location (-180 to 180)")]
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastByCityRequest {
    #[schemars(description = "Name of the city (e.g. \"San Francisco\", \"Chicago\")")]
    pub city_name: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CompareWeatherRequest {
    #[schemars(
        description = "First location: a place name or \"lat,lon\" (e.g. \"New York\" or \"40.7128,-74.0060\")"
    )]
    pub location1: String,
    #[schemars(
        description = "Second location: a place name or \"lat,lon\" (e.g. \"Los Angeles\" or \"34.0522,-118.2437\")"
    )]
    pub location2: String,
}
