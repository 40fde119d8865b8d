use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::compare::compare;
use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::formatters::{
    format_alerts, format_comparison, format_current_conditions, format_forecast,
};
use crate::geocode::Geocoder;
use crate::http::HttpClient;
use crate::location::{Coordinates, StateCode};
use crate::models::{
    CompareWeatherRequest, CoordinatesRequest, GetAlertsRequest, GetForecastByCityRequest,
};
use crate::nws::NwsClient;

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    geocoder: Geocoder,
    nws: NwsClient,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance sharing one HTTP client
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let http = HttpClient::new(config)?;

        Ok(Self {
            geocoder: Geocoder::new(http.clone(), config.geocoding_api_base.clone()),
            nws: NwsClient::new(http, config.nws_api_base.clone()),
            tool_router: Self::tool_router(),
        })
    }

    async fn alerts_report(&self, state: &str) -> Result<String, WeatherError> {
        let state: StateCode = state.parse()?;
        let alerts = self.nws.alerts(&state).await?;
        Ok(format_alerts(&state, &alerts))
    }

    async fn forecast_report(&self, latitude: f64, longitude: f64) -> Result<String, WeatherError> {
        let coordinates = Coordinates::new(latitude, longitude)?;
        let forecast = self.nws.forecast(coordinates).await?;
        Ok(format_forecast(&forecast, None))
    }

    async fn city_forecast_report(&self, city_name: &str) -> Result<String, WeatherError> {
        let resolved = self.geocoder.resolve(city_name).await?;
        let forecast = self.nws.forecast(resolved.coordinates).await?;
        Ok(format_forecast(&forecast, Some(&resolved.label)))
    }

    async fn conditions_report(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<String, WeatherError> {
        let coordinates = Coordinates::new(latitude, longitude)?;
        let conditions = self.nws.current_conditions(coordinates).await?;
        Ok(format_current_conditions(&conditions))
    }

    async fn comparison_report(
        &self,
        location1: &str,
        location2: &str,
    ) -> Result<String, WeatherError> {
        let comparison = compare(&self.geocoder, &self.nws, location1, location2).await?;
        Ok(format_comparison(&comparison))
    }
}

/// Domain failures are tool results, not protocol errors: the client always
/// gets text back, flagged with `is_error` when something went wrong.
fn into_tool_result(tool: &str, result: Result<String, WeatherError>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => {
            tracing::warn!("{} failed ({:?}): {}", tool, e.kind(), e);
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the National Weather Service API \
                and Open-Meteo geocoding. Provides state alerts, forecasts by coordinates or \
                city name, current station observations, and side-by-side comparisons of two \
                US locations."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get active weather alerts for a US state. Provide a two-letter state code (e.g., 'CA' for California, 'NY' for New York).")]
    pub async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        let result = self.alerts_report(&request.state).await;
        Ok(into_tool_result("get_alerts", result))
    }

    /// Gets the next ten forecast periods for a coordinate
    #[tool(description = "Get the weather forecast (next 10 periods, about 5 days) for a US location. Provide latitude (-90 to 90) and longitude (-180 to 180), e.g. latitude: 40.7128, longitude: -74.0060 for New York.")]
    pub async fn get_forecast(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self.forecast_report(request.latitude, request.longitude).await;
        Ok(into_tool_result("get_forecast", result))
    }

    /// Geocodes a city name, then gets its forecast
    #[tool(description = "Get the weather forecast for a US city by name (e.g., 'San Francisco', 'Chicago'). The first geocoding match is used.")]
    pub async fn get_forecast_by_city(
        &self,
        Parameters(request): Parameters<GetForecastByCityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting forecast for city: {}", request.city_name);

        let result = self.city_forecast_report(&request.city_name).await;
        Ok(into_tool_result("get_forecast_by_city", result))
    }

    /// Gets the latest observation from the nearest station
    #[tool(description = "Get current weather conditions from the observation station nearest to a US location. Provide latitude and longitude.")]
    pub async fn get_current_conditions(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting current conditions for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self.conditions_report(request.latitude, request.longitude).await;
        Ok(into_tool_result("get_current_conditions", result))
    }

    /// Compares the first forecast period of two locations
    #[tool(description = "Compare the weather at two US locations side-by-side. Each location is a city name or 'lat,lon' (e.g., 'New York' or '40.7128,-74.0060'). Reports both forecasts and the temperature difference.")]
    pub async fn compare_weather(
        &self,
        Parameters(request): Parameters<CompareWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Comparing weather: '{}' vs '{}'",
            request.location1,
            request.location2
        );

        let result = self
            .comparison_report(&request.location1, &request.location2)
            .await;
        Ok(into_tool_result("compare_weather", result))
    }
}
