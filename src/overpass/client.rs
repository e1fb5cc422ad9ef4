use reqwest::Client;
use tracing::{debug, info, instrument};

use super::types::OverpassResponse;
use crate::config::OverpassConfig;
use crate::{PharmacyError, Result};

/// Overpass interpreter client
#[derive(Debug, Clone)]
pub struct OverpassClient {
    client: Client,
    base_url: String,
    timeout_seconds: u32,
}

impl OverpassClient {
    /// Create a new client with the configured timeout and User-Agent
    pub fn new(config: &OverpassConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| PharmacyError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout in seconds, to be embedded in queries as `[timeout:N]`
    #[must_use]
    pub fn timeout_seconds(&self) -> u32 {
        self.timeout_seconds
    }

    /// POST `query` as the form field `data` and decode the element list
    #[instrument(level = "debug", skip(self, query), fields(url = %self.base_url))]
    pub async fn query(&self, query: &str) -> Result<OverpassResponse> {
        debug!("Overpass query:\n{}", query);

        let response = self
            .client
            .post(&self.base_url)
            .form(&[("data", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PharmacyError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body: OverpassResponse = response
            .json()
            .await
            .map_err(|e| PharmacyError::parse(format!("Failed to parse Overpass response: {e}")))?;

        info!("Overpass returned {} elements", body.elements.len());
        Ok(body)
    }
}
