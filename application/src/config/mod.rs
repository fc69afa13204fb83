//! Application-level configuration.
//!
//! - [`PredictionParams`]: validation and classification control

pub mod prediction_params;

pub use prediction_params::PredictionParams;
