//! Shared fixtures for the wiremock-backed integration tests.

#![allow(dead_code)]

use nws_weather_mcp::WeatherConfig;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn config_for(server: &MockServer) -> WeatherConfig {
    WeatherConfig::with_base_url(&server.uri())
}

/// Helper to create a `/points` payload whose URLs point back at the mock server
pub fn test_points(server: &MockServer, office: &str, city: &str, state: &str) -> Value {
    json!({
        "properties": {
            "gridId": office,
            "gridX": 33,
            "gridY": 35,
            "forecast": format!("{}/gridpoints/{}/33,35/forecast", server.uri(), office),
            "observationStations": format!("{}/gridpoints/{}/33,35/stations", server.uri(), office),
            "relativeLocation": {
                "properties": { "city": city, "state": state }
            }
        }
    })
}

/// Helper to create a forecast period JSON
pub fn test_period(name: &str, temperature: i32) -> Value {
    json!({
        "number": 1,
        "name": name,
        "temperature": temperature,
        "temperatureUnit": "F",
        "windSpeed": "10 mph",
        "windDirection": "SW",
        "shortForecast": "Sunny",
        "detailedForecast": format!("Sunny, with a high near {}.", temperature),
        "probabilityOfPrecipitation": { "unitCode": "wmoUnit:percent", "value": null },
        "relativeHumidity": { "unitCode": "wmoUnit:percent", "value": 45 }
    })
}

pub fn test_forecast(periods: Vec<Value>) -> Value {
    json!({ "properties": { "periods": periods } })
}

pub fn test_geocode(name: &str, latitude: f64, longitude: f64, admin1: &str) -> Value {
    json!({
        "results": [{
            "id": 1,
            "name": name,
            "latitude": latitude,
            "longitude": longitude,
            "country_code": "US",
            "admin1": admin1,
            "country": "United States"
        }],
        "generationtime_ms": 0.4
    })
}

/// Mounts `/points/{lat},{lon}` plus the forecast it links to.
pub async fn mount_forecast(
    server: &MockServer,
    point: &str,
    office: &str,
    city: &str,
    state: &str,
    temperatures: &[i32],
) {
    Mock::given(method("GET"))
        .and(path(format!("/points/{}", point)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(test_points(server, office, city, state)),
        )
        .mount(server)
        .await;

    let periods = temperatures
        .iter()
        .enumerate()
        .map(|(i, t)| test_period(&format!("Period {}", i + 1), *t))
        .collect();

    Mock::given(method("GET"))
        .and(path(format!("/gridpoints/{}/33,35/forecast", office)))
        .respond_with(ResponseTemplate::new(200).set_body_json(test_forecast(periods)))
        .mount(server)
        .await;
}

pub async fn mount_geocode(server: &MockServer, query: &str, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Paths of every request the mock server has seen, in order.
pub async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect()
}
