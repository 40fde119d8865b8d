//! MCP server exposing National Weather Service lookups as tools: state
//! alerts, forecasts by coordinate or city name, current observations and a
//! two-location comparison.

pub mod compare;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod geocode;
pub mod http;
pub mod location;
pub mod models;
pub mod nws;
pub mod service;

pub use config::WeatherConfig;
pub use error::{ErrorKind, WeatherError};
pub use service::Weather;
