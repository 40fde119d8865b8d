/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("nws-weather-mcp/", env!("CARGO_PKG_VERSION"));

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Open-Meteo geocoding search endpoint
pub const GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Per-request timeout for every upstream call
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Number of forecast periods returned (day/night pairs, so five days)
pub const FORECAST_PERIODS: usize = 10;

/// Postal codes accepted by the alerts endpoint: the 50 states plus DC
pub const US_STATE_CODES: [&str; 51] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "DC",
];
