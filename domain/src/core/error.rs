//! Domain error types

use crate::features::EncodingError;
use crate::prediction::ResponseShapeError;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Risk threshold must be between 0 and 1, got {0}")]
    InvalidThreshold(f64),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    ResponseShape(#[from] ResponseShapeError),
}

impl DomainError {
    /// Whether the error came from the form rather than the service
    pub fn is_form_error(&self) -> bool {
        matches!(self, DomainError::Encoding(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;
    use crate::features::FieldIssue;

    #[test]
    fn test_invalid_threshold_display() {
        let error = DomainError::InvalidThreshold(1.5);
        assert_eq!(
            error.to_string(),
            "Risk threshold must be between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn test_transparent_variants_keep_message() {
        let error: DomainError = ResponseShapeError::FieldNotFound {
            field: "churn_probability",
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Invalid response from API. \"churn_probability\" not found."
        );
        assert!(!error.is_form_error());
    }

    #[test]
    fn test_is_form_error() {
        let error: DomainError = EncodingError {
            issues: vec![FieldIssue::Missing {
                field: FormField::Tenure,
            }],
        }
        .into();
        assert!(error.is_form_error());
    }
}
