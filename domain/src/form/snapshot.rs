//! Form snapshot value object

use super::field::FormField;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A raw value as it appears in a form file
///
/// Form files may write numeric fields as numbers (`tenure = 5`) or as
/// strings (`tenure = "5"`); both are kept as their textual form.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl From<FormValue> for String {
    fn from(raw: FormValue) -> Self {
        match raw {
            FormValue::Text(s) => s,
            FormValue::Integer(i) => i.to_string(),
            FormValue::Float(f) => f.to_string(),
            FormValue::Bool(b) => (if b { "Yes" } else { "No" }).to_string(),
        }
    }
}

/// Read-only view over the form's named input values at submission time
///
/// Keys are form field ids. Unknown keys are kept but never encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, FormValue>", into = "BTreeMap<String, String>")]
pub struct FormSnapshot {
    values: BTreeMap<String, String>,
}

impl From<BTreeMap<String, FormValue>> for FormSnapshot {
    fn from(raw: BTreeMap<String, FormValue>) -> Self {
        Self {
            values: raw.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

impl From<FormSnapshot> for BTreeMap<String, String> {
    fn from(snapshot: FormSnapshot) -> Self {
        snapshot.values
    }
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_value(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// Raw value for a field id, if the form has one
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    pub fn field(&self, field: FormField) -> Option<&str> {
        self.get(field.id())
    }

    /// Overlay `other` on top of this snapshot; its values win
    pub fn merge(mut self, other: FormSnapshot) -> Self {
        self.values.extend(other.values);
        self
    }

    /// Keys that do not name any known form field
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.values
            .keys()
            .filter(|k| k.parse::<FormField>().is_err())
            .map(String::as_str)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
