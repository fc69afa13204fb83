//! Domain layer for churn-predict
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! A prediction runs three steps in strict sequence:
//!
//! - **Encoder**: a [`FormSnapshot`] becomes a fixed-order [`FeatureVector`]
//!   by expanding each categorical field into dummy indicators
//! - **Transport**: the vector's wire form is sent to the prediction service
//!   (ports and adapters live in the outer layers)
//! - **Presenter**: the [`PredictionResponse`] is classified into a
//!   [`RiskAssessment`] and shown as a [`DisplayState`]

pub mod config;
pub mod core;
pub mod display;
pub mod features;
pub mod form;
pub mod prediction;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use display::{DisplayState, InvocationState, Tone};
pub use features::{
    ColumnEncoding, Encoder, EncodingError, FEATURE_COUNT, FeatureColumn, FeatureValue,
    FeatureVector, FieldIssue, SCHEMA,
};
pub use form::{FieldKind, FormField, FormSnapshot, FormValue};
pub use prediction::{
    PROBABILITY_FIELD, PredictionResponse, ResponseShapeError, RiskAssessment, RiskLevel,
    RiskThreshold,
};
