//! Prediction response from the remote model

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the probability field in the service's response body
pub const PROBABILITY_FIELD: &str = "churn_probability";

/// The response body does not carry a usable probability
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResponseShapeError {
    #[error("Invalid response from API. \"{field}\" not found.")]
    FieldNotFound { field: &'static str },

    #[error("Invalid response from API. \"{field}\" is not a number: {value}")]
    NotANumber { field: &'static str, value: String },
}

/// Deserialized response body
///
/// Kept as raw JSON: only the probability field is read, anything else the
/// service adds is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionResponse {
    body: serde_json::Value,
}

impl PredictionResponse {
    pub fn new(body: serde_json::Value) -> Self {
        Self { body }
    }

    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }

    /// Churn probability, accepting either a JSON number or a numeric string
    pub fn churn_probability(&self) -> Result<f64, ResponseShapeError> {
        let value = self
            .body
            .get(PROBABILITY_FIELD)
            .ok_or(ResponseShapeError::FieldNotFound {
                field: PROBABILITY_FIELD,
            })?;

        let parsed = match value {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        parsed
            .filter(|p| p.is_finite())
            .ok_or_else(|| ResponseShapeError::NotANumber {
                field: PROBABILITY_FIELD,
                value: value.to_string(),
            })
    }
}

impl From<serde_json::Value> for PredictionResponse {
    fn from(body: serde_json::Value) -> Self {
        Self::new(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_probability() {
        let response = PredictionResponse::new(json!({ "churn_probability": 0.73 }));
        assert_eq!(response.churn_probability().unwrap(), 0.73);
    }

    #[test]
    fn test_string_probability() {
        let response = PredictionResponse::new(json!({ "churn_probability": "0.2041" }));
        assert_eq!(response.churn_probability().unwrap(), 0.2041);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let response = PredictionResponse::new(json!({
            "churn_probability": 0.1,
            "model_version": "xgb-3"
        }));
        assert_eq!(response.churn_probability().unwrap(), 0.1);
    }

    #[test]
    fn test_missing_field() {
        let response = PredictionResponse::new(json!({ "probability": 0.9 }));
        let err = response.churn_probability().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid response from API. \"churn_probability\" not found."
        );
    }

    #[test]
    fn test_non_object_body_has_no_field() {
        let response = PredictionResponse::new(json!("0.9"));
        assert!(matches!(
            response.churn_probability(),
            Err(ResponseShapeError::FieldNotFound { .. })
        ));
    }

    #[test]
    fn test_unparseable_probability() {
        for body in [
            json!({ "churn_probability": "high" }),
            json!({ "churn_probability": null }),
            json!({ "churn_probability": true }),
        ] {
            let response = PredictionResponse::new(body);
            assert!(matches!(
                response.churn_probability(),
                Err(ResponseShapeError::NotANumber { .. })
            ));
        }
    }
}
