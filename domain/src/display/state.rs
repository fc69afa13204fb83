//! Visible display state: a text message and a colour signal

use super::invocation::InvocationState;
use serde::Serialize;

/// Colour signal shown alongside the message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Idle or in progress
    Neutral,
    /// High churn risk
    Alert,
    /// Low churn risk
    Safe,
    /// The invocation failed
    Error,
}

impl Tone {
    /// Colour for the message text
    pub fn text_color(&self) -> &'static str {
        match self {
            Tone::Neutral => "#333",
            Tone::Alert => "#D9534F",
            Tone::Safe => "#5CB85C",
            Tone::Error => "red",
        }
    }

    /// Colour for the surrounding border
    pub fn border_color(&self) -> &'static str {
        match self {
            Tone::Neutral => "#ccc",
            other => other.text_color(),
        }
    }
}

/// What the user sees for a given invocation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState {
    pub message: String,
    pub tone: Tone,
}

impl DisplayState {
    pub const IN_PROGRESS_MESSAGE: &'static str = "Analyzing...";

    pub fn new(message: impl Into<String>, tone: Tone) -> Self {
        Self {
            message: message.into(),
            tone,
        }
    }
}

impl From<&InvocationState> for DisplayState {
    fn from(state: &InvocationState) -> Self {
        match state {
            InvocationState::Idle => DisplayState::new("", Tone::Neutral),
            InvocationState::InProgress => {
                DisplayState::new(DisplayState::IN_PROGRESS_MESSAGE, Tone::Neutral)
            }
            InvocationState::Succeeded { assessment } if assessment.is_high() => {
                DisplayState::new(
                    format!(
                        "High Risk ({}%) - Customer is likely to CHURN.",
                        assessment.percentage()
                    ),
                    Tone::Alert,
                )
            }
            InvocationState::Succeeded { assessment } => DisplayState::new(
                format!(
                    "Low Risk ({}%) - Customer is likely to STAY.",
                    assessment.percentage()
                ),
                Tone::Safe,
            ),
            InvocationState::Failed { message } => {
                DisplayState::new(format!("Error: {}", message), Tone::Error)
            }
        }
    }
}
