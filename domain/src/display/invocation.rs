//! Per-invocation state machine
//!
//! `Idle → InProgress → {Succeeded, Failed}`. Nothing carries over between
//! invocations; each one starts again from `Idle`.

use crate::prediction::RiskAssessment;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InvocationState {
    Idle,
    InProgress,
    Succeeded { assessment: RiskAssessment },
    Failed { message: String },
}

impl InvocationState {
    pub fn succeeded(assessment: RiskAssessment) -> Self {
        Self::Succeeded { assessment }
    }

    pub fn failed(error: impl std::fmt::Display) -> Self {
        Self::Failed {
            message: error.to_string(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InProgress => "in_progress",
            Self::Succeeded { .. } => "succeeded",
            Self::Failed { .. } => "failed",
        }
    }

    /// Whether `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: &InvocationState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::InProgress)
                | (Self::InProgress, Self::Succeeded { .. })
                | (Self::InProgress, Self::Failed { .. })
                | (Self::Succeeded { .. }, Self::Idle)
                | (Self::Failed { .. }, Self::Idle)
        )
    }
}

impl Default for InvocationState {
    fn default() -> Self {
        Self::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::RiskThreshold;

    #[test]
    fn test_happy_path_transitions() {
        let done = InvocationState::succeeded(RiskAssessment::assess(0.2, RiskThreshold::default()));
        assert!(InvocationState::Idle.can_transition_to(&InvocationState::InProgress));
        assert!(InvocationState::InProgress.can_transition_to(&done));
        assert!(done.can_transition_to(&InvocationState::Idle));
    }

    #[test]
    fn test_cannot_skip_in_progress() {
        let failed = InvocationState::failed("boom");
        assert!(!InvocationState::Idle.can_transition_to(&failed));
        assert!(!failed.can_transition_to(&InvocationState::InProgress));
    }

    #[test]
    fn test_terminal_states() {
        assert!(!InvocationState::Idle.is_terminal());
        assert!(!InvocationState::InProgress.is_terminal());
        assert!(InvocationState::failed("x").is_terminal());
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(InvocationState::failed("boom")).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["message"], "boom");
    }
}
