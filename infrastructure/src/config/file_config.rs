//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use churn_application::PredictionParams;
use churn_domain::{OutputFormat, RiskThreshold};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export OutputFormat from domain for convenience
pub use churn_domain::OutputFormat as FileOutputFormat;

/// Endpoint used when no configuration overrides it
///
/// Fixed at build time through `CHURN_PREDICT_ENDPOINT`.
pub const DEFAULT_ENDPOINT: &str = match option_env!("CHURN_PREDICT_ENDPOINT") {
    Some(url) => url,
    None => "https://5rh41ecvfd.execute-api.us-east-1.amazonaws.com/predict",
};

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("endpoint url cannot be empty")]
    EmptyEndpoint,

    #[error("endpoint url must start with http:// or https://, got {0}")]
    InvalidEndpointScheme(String),

    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("risk threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),
}

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Prediction service URL
    pub url: String,
    /// Request timeout in seconds (none by default)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
        }
    }
}

/// Raw encoding configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEncodingConfig {
    /// Reject incomplete or out-of-domain forms before sending
    pub validate: bool,
}

impl Default for FileEncodingConfig {
    fn default() -> Self {
        Self { validate: true }
    }
}

/// Raw risk classification configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRiskConfig {
    /// Probability above which a customer is high risk
    pub threshold: f64,
}

impl Default for FileRiskConfig {
    fn default() -> Self {
        Self {
            threshold: RiskThreshold::DEFAULT,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Prediction service settings
    pub endpoint: FileEndpointConfig,
    /// Feature encoding settings
    pub encoding: FileEncodingConfig,
    /// Risk classification settings
    pub risk: FileRiskConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = self.endpoint.url.trim();
        if url.is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigValidationError::InvalidEndpointScheme(url.to_string()));
        }

        // Timeout of 0 seconds doesn't make sense
        if let Some(0) = self.endpoint.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if RiskThreshold::new(self.risk.threshold).is_err() {
            return Err(ConfigValidationError::InvalidThreshold(self.risk.threshold));
        }

        Ok(())
    }

    /// Use case parameters described by this configuration
    pub fn prediction_params(&self) -> Result<PredictionParams, ConfigValidationError> {
        let threshold = RiskThreshold::new(self.risk.threshold)
            .map_err(|_| ConfigValidationError::InvalidThreshold(self.risk.threshold))?;

        Ok(PredictionParams::default()
            .with_validation(self.encoding.validate)
            .with_threshold(threshold))
    }
}
