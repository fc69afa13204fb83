//! Application layer for churn-predict
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PredictionParams;
pub use ports::{
    display_surface::{DisplaySurface, NoDisplay},
    prediction_gateway::{GatewayError, PredictionGateway},
};
pub use use_cases::predict_churn::{PredictChurnError, PredictChurnOutput, PredictChurnUseCase};
