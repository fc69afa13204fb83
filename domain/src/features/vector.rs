//! Feature vector value object

use super::schema::{FEATURE_COUNT, SCHEMA};
use serde::{Serialize, Serializer};
use std::fmt;

/// A single encoded position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    /// 0/1 flag or dummy indicator
    Indicator(bool),
    /// Decimal magnitude; `NaN` when the form value was missing or unparseable
    Decimal(f64),
}

impl FeatureValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            FeatureValue::Indicator(true) => 1.0,
            FeatureValue::Indicator(false) => 0.0,
            FeatureValue::Decimal(v) => *v,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Indicator(true) => write!(f, "1"),
            FeatureValue::Indicator(false) => write!(f, "0"),
            // f64's Display is the shortest round-trip form: 5, 70.5, NaN
            FeatureValue::Decimal(v) => write!(f, "{}", v),
        }
    }
}

/// Ordered, fixed-length input for the churn model
///
/// Only the encoder constructs these, so the length always equals
/// [`FEATURE_COUNT`] and positions line up with [`SCHEMA`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [FeatureValue; FEATURE_COUNT],
}

impl FeatureVector {
    pub(crate) fn new(values: [FeatureValue; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a column by its training-time name
    pub fn get(&self, column: &str) -> Option<FeatureValue> {
        super::schema::column_index(column).map(|i| self.values[i])
    }

    /// Comma-separated wire form expected by the prediction service
    pub fn to_wire(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Pairs of (column name, value) in wire order
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, FeatureValue)> + '_ {
        SCHEMA.iter().zip(self.values.iter()).map(|(c, v)| (c.name, *v))
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wire())
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_value_display() {
        assert_eq!(FeatureValue::Indicator(true).to_string(), "1");
        assert_eq!(FeatureValue::Indicator(false).to_string(), "0");
        assert_eq!(FeatureValue::Decimal(5.0).to_string(), "5");
        assert_eq!(FeatureValue::Decimal(70.5).to_string(), "70.5");
        assert_eq!(FeatureValue::Decimal(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(FeatureValue::Indicator(true).as_f64(), 1.0);
        assert_eq!(FeatureValue::Decimal(29.85).as_f64(), 29.85);
    }

    #[test]
    fn test_wire_form_and_serialize_agree() {
        let vector = FeatureVector::new([FeatureValue::Indicator(false); FEATURE_COUNT]);
        let wire = vector.to_wire();
        assert_eq!(wire.split(',').count(), FEATURE_COUNT);
        assert_eq!(serde_json::to_string(&vector).unwrap(), format!("\"{}\"", wire));
    }
}
