//! Risk classification of a churn probability

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability above which a customer is classified as high risk
///
/// The comparison is strict: a probability equal to the threshold is low risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RiskThreshold(f64);

impl RiskThreshold {
    pub const DEFAULT: f64 = 0.5;

    pub fn new(value: f64) -> Result<Self, DomainError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidThreshold(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for RiskThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f64> for RiskThreshold {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RiskThreshold> for f64 {
    fn from(threshold: RiskThreshold) -> Self {
        threshold.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Customer is likely to churn
    High,
    /// Customer is likely to stay
    Low,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::High => "high",
            RiskLevel::Low => "low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub probability: f64,
    pub level: RiskLevel,
}

impl RiskAssessment {
    pub fn assess(probability: f64, threshold: RiskThreshold) -> Self {
        let level = if probability > threshold.value() {
            RiskLevel::High
        } else {
            RiskLevel::Low
        };
        Self { probability, level }
    }

    /// Probability as a percentage with two decimals, e.g. `73.00`
    ///
    /// An exact tie rounds away from zero (`12.125` shows as `12.13`).
    pub fn percentage(&self) -> String {
        fixed_two_places(self.probability * 100.0)
    }

    pub fn is_high(&self) -> bool {
        self.level == RiskLevel::High
    }
}

/// Two-decimal rendering with ties rounded up in magnitude
///
/// `{:.2}` already rounds the exact binary value to nearest, so only exact
/// ties need care. A double is an exact tie at the third decimal only when
/// it is an odd multiple of 1/8.
fn fixed_two_places(value: f64) -> String {
    let magnitude = value.abs();
    let eighths = magnitude * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths % 2.0 == 1.0;

    let digits = if is_tie {
        format!("{:.2}", (magnitude * 100.0).ceil() / 100.0)
    } else {
        format!("{:.2}", magnitude)
    };

    if value < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}
