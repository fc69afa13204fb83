//! Infrastructure layer for churn-predict
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and form file loading.

pub mod config;
pub mod form;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DEFAULT_ENDPOINT, FileConfig, FileEncodingConfig,
    FileEndpointConfig, FileOutputConfig, FileOutputFormat, FileRiskConfig,
};
pub use form::{FormFormat, FormLoadError, FormLoader};
pub use http::HttpPredictionGateway;
