//! Prediction results: the service response and its risk classification.

pub mod response;
pub mod risk;

pub use response::{PROBABILITY_FIELD, PredictionResponse, ResponseShapeError};
pub use risk::{RiskAssessment, RiskLevel, RiskThreshold};
