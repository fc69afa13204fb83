//! Form validation issues raised before encoding

use crate::form::FormField;
use std::fmt;
use thiserror::Error;

/// A single problem with one form field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldIssue {
    /// The form has no value for the field
    Missing { field: FormField },
    /// A numeric field that is not a finite, non-negative decimal
    NotANumber { field: FormField, value: String },
    /// A categorical field whose value is outside its domain
    UnknownCategory {
        field: FormField,
        value: String,
        allowed: &'static [&'static str],
    },
}

impl FieldIssue {
    pub fn field(&self) -> FormField {
        match self {
            FieldIssue::Missing { field }
            | FieldIssue::NotANumber { field, .. }
            | FieldIssue::UnknownCategory { field, .. } => *field,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing { field } => write!(f, "{} is missing", field),
            FieldIssue::NotANumber { field, value } => {
                write!(f, "{} must be a non-negative number, got \"{}\"", field, value)
            }
            FieldIssue::UnknownCategory {
                field,
                value,
                allowed,
            } => write!(
                f,
                "{} has unknown value \"{}\" (expected one of: {})",
                field,
                value,
                allowed.join(", ")
            ),
        }
    }
}

/// Every issue found in a form snapshot
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid form: {}", join_issues(.issues))]
pub struct EncodingError {
    pub issues: Vec<FieldIssue>,
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
