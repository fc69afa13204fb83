//! Feature schema: the model's expected input columns, in wire order
//!
//! The order here is the contract with the trained model. Columns come from
//! one-hot encoding each categorical field with its first category dropped,
//! so the dropped (reference) category is the one encoded as all zeros.

use crate::form::FormField;
use serde::Serialize;

/// How a single column is computed from its source field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ColumnEncoding {
    /// 1 when the field is `Yes`, else 0
    Flag,
    /// The field's value parsed as a decimal
    Decimal,
    /// 1 when the field equals the given category, else 0
    Indicator(&'static str),
}

/// One position in the feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureColumn {
    /// Column name as produced at training time
    pub name: &'static str,
    pub field: FormField,
    pub encoding: ColumnEncoding,
}

const fn column(name: &'static str, field: FormField, encoding: ColumnEncoding) -> FeatureColumn {
    FeatureColumn {
        name,
        field,
        encoding,
    }
}

const fn indicator(name: &'static str, field: FormField, category: &'static str) -> FeatureColumn {
    column(name, field, ColumnEncoding::Indicator(category))
}

/// Number of values in every encoded feature vector
pub const FEATURE_COUNT: usize = SCHEMA.len();

/// The model's input columns in the exact order they are sent
pub const SCHEMA: [FeatureColumn; 30] = [
    column("SeniorCitizen", FormField::SeniorCitizen, ColumnEncoding::Flag),
    column("tenure", FormField::Tenure, ColumnEncoding::Decimal),
    column("MonthlyCharges", FormField::MonthlyCharges, ColumnEncoding::Decimal),
    column("TotalCharges", FormField::TotalCharges, ColumnEncoding::Decimal),
    indicator("gender_Male", FormField::Gender, "Male"),
    indicator("Partner_Yes", FormField::Partner, "Yes"),
    indicator("Dependents_Yes", FormField::Dependents, "Yes"),
    indicator("PhoneService_Yes", FormField::PhoneService, "Yes"),
    indicator("MultipleLines_No phone service", FormField::MultipleLines, "No phone service"),
    indicator("MultipleLines_Yes", FormField::MultipleLines, "Yes"),
    indicator("InternetService_Fiber optic", FormField::InternetService, "Fiber optic"),
    indicator("InternetService_No", FormField::InternetService, "No"),
    indicator("OnlineSecurity_No internet service", FormField::OnlineSecurity, "No internet service"),
    indicator("OnlineSecurity_Yes", FormField::OnlineSecurity, "Yes"),
    indicator("OnlineBackup_No internet service", FormField::OnlineBackup, "No internet service"),
    indicator("OnlineBackup_Yes", FormField::OnlineBackup, "Yes"),
    indicator("DeviceProtection_No internet service", FormField::DeviceProtection, "No internet service"),
    indicator("DeviceProtection_Yes", FormField::DeviceProtection, "Yes"),
    indicator("TechSupport_No internet service", FormField::TechSupport, "No internet service"),
    indicator("TechSupport_Yes", FormField::TechSupport, "Yes"),
    indicator("StreamingTV_No internet service", FormField::StreamingTv, "No internet service"),
    indicator("StreamingTV_Yes", FormField::StreamingTv, "Yes"),
    indicator("StreamingMovies_No internet service", FormField::StreamingMovies, "No internet service"),
    indicator("StreamingMovies_Yes", FormField::StreamingMovies, "Yes"),
    indicator("Contract_One year", FormField::Contract, "One year"),
    indicator("Contract_Two year", FormField::Contract, "Two year"),
    indicator("PaperlessBilling_Yes", FormField::PaperlessBilling, "Yes"),
    indicator("PaymentMethod_Credit card (automatic)", FormField::PaymentMethod, "Credit card (automatic)"),
    indicator("PaymentMethod_Electronic check", FormField::PaymentMethod, "Electronic check"),
    indicator("PaymentMethod_Mailed check", FormField::PaymentMethod, "Mailed check"),
];

/// Position of a column by its training-time name
pub fn column_index(name: &str) -> Option<usize> {
    SCHEMA.iter().position(|c| c.name == name)
}
