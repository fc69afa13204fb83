//! Feature encoding for the churn model.
//!
//! - [`schema`]: the model's input columns in wire order
//! - [`encoder::Encoder`]: snapshot → feature vector, plus optional validation
//! - [`vector::FeatureVector`]: the fixed-length encoded result

pub mod encoder;
pub mod schema;
pub mod validation;
pub mod vector;

pub use encoder::Encoder;
pub use schema::{ColumnEncoding, FEATURE_COUNT, FeatureColumn, SCHEMA, column_index};
pub use validation::{EncodingError, FieldIssue};
pub use vector::{FeatureValue, FeatureVector};
