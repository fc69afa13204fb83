//! Form field definitions
//!
//! Each field of the customer form is identified by the id the form uses
//! for its input element (`senior-citizen`, `internet-service`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a form field's raw value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Yes/No flag, `Yes` encodes as 1
    Flag,
    /// Non-negative decimal magnitude
    Decimal,
    /// One of a closed set of values; `reference` is the baseline category
    Categorical {
        values: &'static [&'static str],
        reference: &'static str,
    },
}

const YES_NO: &[&str] = &["No", "Yes"];
const INTERNET_ADDON: &[&str] = &["No", "Yes", "No internet service"];

/// A named input field on the customer form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormField {
    SeniorCitizen,
    Tenure,
    MonthlyCharges,
    TotalCharges,
    Gender,
    Partner,
    Dependents,
    PhoneService,
    MultipleLines,
    InternetService,
    OnlineSecurity,
    OnlineBackup,
    DeviceProtection,
    TechSupport,
    StreamingTv,
    StreamingMovies,
    Contract,
    PaperlessBilling,
    PaymentMethod,
}

impl FormField {
    /// Every field, in the order the form lays them out
    pub const ALL: [FormField; 19] = [
        FormField::SeniorCitizen,
        FormField::Tenure,
        FormField::MonthlyCharges,
        FormField::TotalCharges,
        FormField::Gender,
        FormField::Partner,
        FormField::Dependents,
        FormField::PhoneService,
        FormField::MultipleLines,
        FormField::InternetService,
        FormField::OnlineSecurity,
        FormField::OnlineBackup,
        FormField::DeviceProtection,
        FormField::TechSupport,
        FormField::StreamingTv,
        FormField::StreamingMovies,
        FormField::Contract,
        FormField::PaperlessBilling,
        FormField::PaymentMethod,
    ];

    /// The form's element id for this field
    pub fn id(&self) -> &'static str {
        match self {
            FormField::SeniorCitizen => "senior-citizen",
            FormField::Tenure => "tenure",
            FormField::MonthlyCharges => "monthly-charges",
            FormField::TotalCharges => "total-charges",
            FormField::Gender => "gender",
            FormField::Partner => "partner",
            FormField::Dependents => "dependents",
            FormField::PhoneService => "phone-service",
            FormField::MultipleLines => "multiple-lines",
            FormField::InternetService => "internet-service",
            FormField::OnlineSecurity => "online-security",
            FormField::OnlineBackup => "online-backup",
            FormField::DeviceProtection => "device-protection",
            FormField::TechSupport => "tech-support",
            FormField::StreamingTv => "streaming-tv",
            FormField::StreamingMovies => "streaming-movies",
            FormField::Contract => "contract",
            FormField::PaperlessBilling => "paperless-billing",
            FormField::PaymentMethod => "payment-method",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::SeniorCitizen => FieldKind::Flag,
            FormField::Tenure | FormField::MonthlyCharges | FormField::TotalCharges => {
                FieldKind::Decimal
            }
            FormField::Gender => FieldKind::Categorical {
                values: &["Female", "Male"],
                reference: "Female",
            },
            FormField::Partner
            | FormField::Dependents
            | FormField::PhoneService
            | FormField::PaperlessBilling => FieldKind::Categorical {
                values: YES_NO,
                reference: "No",
            },
            FormField::MultipleLines => FieldKind::Categorical {
                values: &["No", "Yes", "No phone service"],
                reference: "No",
            },
            FormField::InternetService => FieldKind::Categorical {
                values: &["DSL", "Fiber optic", "No"],
                reference: "DSL",
            },
            FormField::OnlineSecurity
            | FormField::OnlineBackup
            | FormField::DeviceProtection
            | FormField::TechSupport
            | FormField::StreamingTv
            | FormField::StreamingMovies => FieldKind::Categorical {
                values: INTERNET_ADDON,
                reference: "No",
            },
            FormField::Contract => FieldKind::Categorical {
                values: &["Month-to-month", "One year", "Two year"],
                reference: "Month-to-month",
            },
            FormField::PaymentMethod => FieldKind::Categorical {
                values: &[
                    "Bank transfer (automatic)",
                    "Credit card (automatic)",
                    "Electronic check",
                    "Mailed check",
                ],
                reference: "Bank transfer (automatic)",
            },
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .iter()
            .copied()
            .find(|field| field.id() == s)
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}
