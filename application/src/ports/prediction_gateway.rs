//! Prediction Gateway port
//!
//! Defines the interface for talking to the remote churn model.

use async_trait::async_trait;
use churn_domain::{FeatureVector, PredictionResponse};
use thiserror::Error;

/// Errors from the request/response exchange with the prediction service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The service answered with a non-success status
    #[error("API call failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// No response was received
    #[error("Network error: {0}")]
    Network(String),

    /// A success response whose body is not JSON
    #[error("Invalid response body: {0}")]
    InvalidBody(String),
}

impl GatewayError {
    /// HTTP status, when the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Gateway to the prediction service
///
/// One call is one request/response exchange; implementations do not retry.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait PredictionGateway: Send + Sync {
    /// Where requests are sent (for logging)
    fn endpoint(&self) -> &str;

    /// Send the encoded features and return the deserialized response
    async fn predict(&self, features: &FeatureVector) -> Result<PredictionResponse, GatewayError>;
}
