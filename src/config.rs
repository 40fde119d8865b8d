use anyhow::{bail, Context, Result};
use std::time::Duration;

use crate::constants::{GEOCODING_API_BASE, NWS_API_BASE, REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Runtime configuration shared read-only by every upstream client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    pub nws_api_base: String,
    pub geocoding_api_base: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            nws_api_base: NWS_API_BASE.to_string(),
            geocoding_api_base: GEOCODING_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl WeatherConfig {
    /// Builds the configuration from defaults, overridden by `NWS_API_BASE`,
    /// `GEOCODING_API_BASE`, `WEATHER_USER_AGENT` and `WEATHER_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(base) = var("NWS_API_BASE") {
            config.nws_api_base = base;
        }
        if let Some(base) = var("GEOCODING_API_BASE") {
            config.geocoding_api_base = base;
        }
        if let Some(agent) = var("WEATHER_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Some(secs) = var("WEATHER_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("WEATHER_TIMEOUT_SECS is not a whole number: {secs}"))?;
            if secs == 0 {
                bail!("WEATHER_TIMEOUT_SECS must be greater than zero");
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config.normalized())
    }

    /// Points both upstream clients at a single base URL. Used by tests that
    /// stand up one mock server for every API.
    pub fn with_base_url(base: &str) -> Self {
        Self {
            nws_api_base: base.to_string(),
            geocoding_api_base: format!("{}/v1/search", base.trim_end_matches('/')),
            ..Self::default()
        }
        .normalized()
    }

    fn normalized(mut self) -> Self {
        self.nws_api_base = self.nws_api_base.trim_end_matches('/').to_string();
        self.geocoding_api_base = self.geocoding_api_base.trim_end_matches('/').to_string();
        self
    }
}
