//! HTTP prediction gateway
//!
//! POSTs `{"features": "<wire vector>"}` to the configured endpoint and
//! returns the JSON body. One request per call; no retries.

use async_trait::async_trait;
use churn_application::{GatewayError, PredictionGateway};
use churn_domain::{FeatureVector, PredictionResponse};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Request body expected by the prediction service
#[derive(Debug, Serialize)]
struct PredictionRequest {
    features: String,
}

/// [`PredictionGateway`] backed by `reqwest`
pub struct HttpPredictionGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionGateway {
    /// Gateway with no request timeout
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Gateway whose requests give up after `timeout`
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PredictionGateway for HttpPredictionGateway {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn predict(&self, features: &FeatureVector) -> Result<PredictionResponse, GatewayError> {
        let request = PredictionRequest {
            features: features.to_wire(),
        };

        // `.json()` also sets `Content-Type: application/json`
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Prediction service returned an error");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), body = %body, "Prediction service response");

        serde_json::from_str::<serde_json::Value>(&body)
            .map(PredictionResponse::new)
            .map_err(|e| GatewayError::InvalidBody(e.to_string()))
    }
}
