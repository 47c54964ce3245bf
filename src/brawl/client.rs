use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

use crate::brawl::events::EventSlot;
use crate::config::AppConfig;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream returned status {status}")]
    Status { status: reqwest::StatusCode },

    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read access to the Brawl Stars API.
///
/// The command router depends on this trait rather than the concrete client
/// so dispatch can be exercised without the network.
#[async_trait]
pub trait BrawlApi: Send + Sync {
    /// Fetch the playable character roster, passed through as raw JSON text.
    async fn brawlers_raw(&self) -> Result<String, UpstreamError>;

    /// Fetch and decode the current event rotation.
    async fn event_rotation(&self) -> Result<Vec<EventSlot>, UpstreamError>;
}

/// Bearer-token client for the Brawl Stars API. One request per call, no
/// retries; a hung call is bounded by the hosting harness's own timeout.
pub struct BrawlApiClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl BrawlApiClient {
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_token: api_token.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.brawlstars_api_url, &config.brawlstars_api_token)
    }

    async fn get_text(&self, path: &str) -> Result<String, UpstreamError> {
        debug!(path, "Requesting Brawl Stars API");

        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { status });
        }

        let body = response.text().await?;
        info!(path, bytes = body.len(), "Brawl Stars API request completed");
        Ok(body)
    }
}

#[async_trait]
impl BrawlApi for BrawlApiClient {
    async fn brawlers_raw(&self) -> Result<String, UpstreamError> {
        self.get_text("/v1/brawlers").await
    }

    async fn event_rotation(&self) -> Result<Vec<EventSlot>, UpstreamError> {
        let body = self.get_text("/v1/events/rotation").await?;
        let slots = serde_json::from_str(&body)?;
        Ok(slots)
    }
}
