//! Prediction parameters for use case behaviour control.
//!
//! [`PredictionParams`] groups the knobs that change how
//! [`PredictChurnUseCase`](crate::use_cases::predict_churn::PredictChurnUseCase)
//! treats a form and classifies the result.

use churn_domain::RiskThreshold;
use serde::{Deserialize, Serialize};

/// Use case behaviour parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionParams {
    /// Reject forms with missing or out-of-domain values before sending.
    pub validate: bool,
    /// Probability above which a customer is high risk.
    pub threshold: RiskThreshold,
}

impl Default for PredictionParams {
    fn default() -> Self {
        Self {
            validate: true,
            threshold: RiskThreshold::default(),
        }
    }
}

impl PredictionParams {
    // ==================== Builder Methods ====================

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_threshold(mut self, threshold: RiskThreshold) -> Self {
        self.threshold = threshold;
        self
    }
}
