use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::models::PredictionResponse;

/// Result of a successful predictions fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Backend reported `games_count == 0`
    Empty,

    /// At least one game was predicted
    Populated(PredictionResponse),
}

/// Client for the predictions REST API
pub struct PredictionsClient {
    client: Client,
    base_url: String,
}

/// Body of `GET /health`
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

impl PredictionsClient {
    /// Create a new predictions client
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client around a preconfigured `reqwest::Client`
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch today's predictions. Performs exactly one request.
    pub async fn fetch_predictions(&self) -> Result<FetchOutcome, FetchError> {
        let url = format!("{}/predictions", self.base_url);

        info!("Fetching predictions from {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Request {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(FetchError::Network)?;

        debug!("Predictions response: {} ({} bytes)", status, body.len());

        classify_response(status, &body)
    }

    /// Check whether the backend reports itself healthy
    pub async fn check_health(&self) -> bool {
        let url = format!("{}/health", self.base_url);

        let response = match self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Health check failed: {}", e);
                return false;
            }
        };

        if !response.status().is_success() {
            warn!("Health check returned {}", response.status());
            return false;
        }

        match response.json::<HealthResponse>().await {
            Ok(health) => health.status == "healthy",
            Err(e) => {
                warn!("Failed to parse health response: {}", e);
                false
            }
        }
    }
}

/// Classify a completed HTTP exchange into an outcome or failure
pub fn classify_response(status: StatusCode, body: &str) -> Result<FetchOutcome, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Request {
            status: status.as_u16(),
        });
    }

    let response: PredictionResponse = serde_json::from_str(body)?;

    if response.is_empty() {
        if !response.predictions.is_empty() {
            warn!(
                "games_count is 0 but {} predictions were sent; showing none",
                response.predictions.len()
            );
        }
        info!("No scheduled games");
        return Ok(FetchOutcome::Empty);
    }

    if response.games_count as usize != response.predictions.len() {
        warn!(
            "games_count {} disagrees with {} predictions",
            response.games_count,
            response.predictions.len()
        );
    }

    info!("Received {} predictions", response.predictions.len());

    Ok(FetchOutcome::Populated(response))
}
