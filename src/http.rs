use anyhow::Result;
use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;

use crate::config::WeatherConfig;

const ACCEPT_JSON: &str = "application/geo+json, application/json";

/// Thin wrapper over a shared `reqwest::Client` carrying the identifying
/// user agent and the fixed timeout. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client })
    }

    /// Makes one GET request and deserializes the JSON body.
    ///
    /// Any failure (transport, timeout, non-2xx status, undecodable body) is
    /// logged and collapsed to `None`. There is no retry.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Option<T> {
        let response = match self
            .client
            .get(url)
            .header(ACCEPT, ACCEPT_JSON)
            .query(query)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!("Request to {} returned status {}", url, response.status());
            return None;
        }

        match response.json::<T>().await {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::debug!("Could not decode response from {}: {}", url, e);
                None
            }
        }
    }
}
