//! Encoder: form snapshot → feature vector
//!
//! `encode` never fails. Missing or unexpected categorical values encode as
//! all-zero indicators, which the model cannot tell apart from the reference
//! category. Decimals are read from their leading numeric text (`"70.5 USD"`
//! encodes as `70.5`); a value with no numeric prefix encodes as `NaN`.
//! Callers that want those cases rejected run [`Encoder::validate`] first,
//! which accepts only values that are a decimal in full.

use super::schema::{ColumnEncoding, FEATURE_COUNT, SCHEMA};
use super::validation::{EncodingError, FieldIssue};
use super::vector::{FeatureValue, FeatureVector};
use crate::form::{FieldKind, FormField, FormSnapshot};

/// Stateless feature encoder for the churn model
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder;

impl Encoder {
    pub fn new() -> Self {
        Self
    }

    /// Encode a snapshot without checking field presence or domains
    pub fn encode(&self, snapshot: &FormSnapshot) -> FeatureVector {
        let mut values = [FeatureValue::Indicator(false); FEATURE_COUNT];

        for (slot, column) in values.iter_mut().zip(SCHEMA.iter()) {
            let raw = snapshot.field(column.field);
            *slot = match column.encoding {
                ColumnEncoding::Flag => FeatureValue::Indicator(raw == Some("Yes")),
                ColumnEncoding::Decimal => {
                    FeatureValue::Decimal(raw.and_then(leading_decimal).unwrap_or(f64::NAN))
                }
                ColumnEncoding::Indicator(category) => {
                    FeatureValue::Indicator(raw == Some(category))
                }
            };
        }

        FeatureVector::new(values)
    }

    /// Check every field for presence and domain, collecting all issues
    pub fn validate(&self, snapshot: &FormSnapshot) -> Result<(), EncodingError> {
        let issues: Vec<FieldIssue> = FormField::ALL
            .iter()
            .filter_map(|&field| check_field(field, snapshot.field(field)))
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(EncodingError { issues })
        }
    }

    /// Validate, then encode
    pub fn encode_checked(&self, snapshot: &FormSnapshot) -> Result<FeatureVector, EncodingError> {
        self.validate(snapshot)?;
        Ok(self.encode(snapshot))
    }
}

/// Finite decimal, surrounding whitespace ignored
fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Finite decimal read from the longest numeric prefix after leading
/// whitespace; trailing text is ignored
fn leading_decimal(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| bytes[start.min(bytes.len())..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = digits_from(exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn check_field(field: FormField, raw: Option<&str>) -> Option<FieldIssue> {
    let Some(value) = raw else {
        return Some(FieldIssue::Missing { field });
    };

    match field.kind() {
        FieldKind::Flag => check_category(field, value, &["No", "Yes"]),
        FieldKind::Decimal => match parse_decimal(value) {
            Some(v) if v >= 0.0 => None,
            _ => Some(FieldIssue::NotANumber {
                field,
                value: value.to_string(),
            }),
        },
        FieldKind::Categorical { values, .. } => check_category(field, value, values),
    }
}

fn check_category(
    field: FormField,
    value: &str,
    allowed: &'static [&'static str],
) -> Option<FieldIssue> {
    if allowed.contains(&value) {
        None
    } else {
        Some(FieldIssue::UnknownCategory {
            field,
            value: value.to_string(),
            allowed,
        })
    }
}
