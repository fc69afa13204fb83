//! Predict Churn use case
//!
//! Runs one prediction: encode the form, exchange it with the prediction
//! service, classify the probability, and keep the display surface in step
//! (`InProgress` first, then `Succeeded` or `Failed`).

use crate::config::PredictionParams;
use crate::ports::display_surface::{DisplaySurface, NoDisplay};
use crate::ports::prediction_gateway::{GatewayError, PredictionGateway};
use churn_domain::{
    Encoder, EncodingError, FeatureVector, FormSnapshot, InvocationState, PredictionResponse,
    ResponseShapeError, RiskAssessment,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that end a prediction in the `Failed` state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictChurnError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Transport(#[from] GatewayError),

    #[error(transparent)]
    ResponseShape(#[from] ResponseShapeError),
}

/// Result of a successful prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictChurnOutput {
    /// The features as sent, in wire form
    pub features: FeatureVector,
    pub response: PredictionResponse,
    pub assessment: RiskAssessment,
}

/// Use case for a single churn prediction
///
/// Holds no per-invocation state, so one instance can serve any number of
/// concurrent invocations.
pub struct PredictChurnUseCase<G: PredictionGateway + 'static> {
    gateway: Arc<G>,
    encoder: Encoder,
    params: PredictionParams,
}

impl<G: PredictionGateway + 'static> PredictChurnUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            encoder: Encoder::new(),
            params: PredictionParams::default(),
        }
    }

    pub fn with_params(mut self, params: PredictionParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &PredictionParams {
        &self.params
    }

    /// Encode the form as it would be sent, without contacting the service
    pub fn encode(&self, snapshot: &FormSnapshot) -> Result<FeatureVector, EncodingError> {
        if self.params.validate {
            self.encoder.encode_checked(snapshot)
        } else {
            Ok(self.encoder.encode(snapshot))
        }
    }

    /// Execute the use case without a display surface
    pub async fn execute(
        &self,
        snapshot: &FormSnapshot,
    ) -> Result<PredictChurnOutput, PredictChurnError> {
        self.execute_with_surface(snapshot, &NoDisplay).await
    }

    /// Execute the use case, rendering each state change on `surface`
    pub async fn execute_with_surface(
        &self,
        snapshot: &FormSnapshot,
        surface: &dyn DisplaySurface,
    ) -> Result<PredictChurnOutput, PredictChurnError> {
        surface.render(&InvocationState::InProgress);

        let result = self.run(snapshot).await;

        match &result {
            Ok(output) => {
                info!(
                    probability = output.assessment.probability,
                    risk = %output.assessment.level,
                    "Prediction complete"
                );
                surface.render(&InvocationState::succeeded(output.assessment));
            }
            Err(e) => {
                error!(error = %e, "Prediction failed");
                surface.render(&InvocationState::failed(e));
            }
        }

        result
    }

    async fn run(&self, snapshot: &FormSnapshot) -> Result<PredictChurnOutput, PredictChurnError> {
        let unknown = snapshot.unknown_keys();
        if !unknown.is_empty() {
            warn!("Ignoring unknown form fields: {}", unknown.join(", "));
        }

        let features = self.encode(snapshot)?;
        debug!(payload = %features, "Sending payload");

        info!("Requesting prediction from {}", self.gateway.endpoint());
        let response = self.gateway.predict(&features).await?;

        let probability = response.churn_probability()?;
        let assessment = RiskAssessment::assess(probability, self.params.threshold);

        Ok(PredictChurnOutput {
            features,
            response,
            assessment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use churn_domain::{DisplayState, FEATURE_COUNT, RiskLevel, RiskThreshold, Tone};
    use serde_json::json;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct MockGateway {
        reply: Result<serde_json::Value, GatewayError>,
        delay: Duration,
        calls: AtomicUsize,
        last_payload: Mutex<Option<String>>,
    }

    impl MockGateway {
        fn replying(body: serde_json::Value) -> Self {
            Self::new(Ok(body))
        }

        fn failing(error: GatewayError) -> Self {
            Self::new(Err(error))
        }

        fn new(reply: Result<serde_json::Value, GatewayError>) -> Self {
            Self {
                reply,
                delay: Duration::ZERO,
                calls: AtomicUsize::new(0),
                last_payload: Mutex::new(None),
            }
        }

        fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PredictionGateway for MockGateway {
        fn endpoint(&self) -> &str {
            "mock://predict"
        }

        async fn predict(
            &self,
            features: &FeatureVector,
        ) -> Result<PredictionResponse, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_payload.lock().unwrap() = Some(features.to_wire());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.reply.clone().map(PredictionResponse::new)
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        states: Mutex<Vec<InvocationState>>,
    }

    impl RecordingSurface {
        fn states(&self) -> Vec<InvocationState> {
            self.states.lock().unwrap().clone()
        }

        fn last_display(&self) -> DisplayState {
            DisplayState::from(self.states().last().unwrap())
        }
    }

    impl DisplaySurface for RecordingSurface {
        fn render(&self, state: &InvocationState) {
            self.states.lock().unwrap().push(state.clone());
        }
    }

    fn complete_form() -> FormSnapshot {
        [
            ("senior-citizen", "No"),
            ("tenure", "5"),
            ("monthly-charges", "70.5"),
            ("total-charges", "350"),
            ("gender", "Female"),
            ("partner", "No"),
            ("dependents", "No"),
            ("phone-service", "Yes"),
            ("multiple-lines", "No"),
            ("internet-service", "Fiber optic"),
            ("online-security", "No"),
            ("online-backup", "No"),
            ("device-protection", "No"),
            ("tech-support", "No"),
            ("streaming-tv", "Yes"),
            ("streaming-movies", "Yes"),
            ("contract", "Month-to-month"),
            ("paperless-billing", "Yes"),
            ("payment-method", "Electronic check"),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn test_high_risk_prediction() {
        let gateway = Arc::new(MockGateway::replying(json!({ "churn_probability": 0.73 })));
        let use_case = PredictChurnUseCase::new(gateway.clone());
        let surface = RecordingSurface::default();

        let output = use_case
            .execute_with_surface(&complete_form(), &surface)
            .await
            .unwrap();

        assert_eq!(output.assessment.level, RiskLevel::High);
        let states = surface.states();
        assert_eq!(states.len(), 2);
        assert_eq!(states[0], InvocationState::InProgress);

        let display = surface.last_display();
        assert_eq!(
            display.message,
            "High Risk (73.00%) - Customer is likely to CHURN."
        );
        assert_eq!(display.tone, Tone::Alert);
    }

    #[tokio::test]
    async fn test_boundary_probability_is_low_risk() {
        let gateway = Arc::new(MockGateway::replying(json!({ "churn_probability": "0.5" })));
        let use_case = PredictChurnUseCase::new(gateway);
        let surface = RecordingSurface::default();

        let output = use_case
            .execute_with_surface(&complete_form(), &surface)
            .await
            .unwrap();

        assert_eq!(output.assessment.level, RiskLevel::Low);
        assert_eq!(surface.last_display().tone, Tone::Safe);
    }

    #[tokio::test]
    async fn test_payload_is_full_wire_vector() {
        let gateway = Arc::new(MockGateway::replying(json!({ "churn_probability": 0.1 })));
        let use_case = PredictChurnUseCase::new(gateway.clone());

        use_case.execute(&complete_form()).await.unwrap();

        let payload = gateway.last_payload.lock().unwrap().clone().unwrap();
        assert_eq!(payload.split(',').count(), FEATURE_COUNT);
        assert!(payload.starts_with("0,5,70.5,350,"));
    }

    #[tokio::test]
    async fn test_server_error_fails_with_status_and_body() {
        let gateway = Arc::new(MockGateway::failing(GatewayError::Status {
            status: 500,
            body: "Internal Server Error".to_string(),
        }));
        let use_case = PredictChurnUseCase::new(gateway);
        let surface = RecordingSurface::default();

        let err = use_case
            .execute_with_surface(&complete_form(), &surface)
            .await
            .unwrap_err();

        assert!(matches!(err, PredictChurnError::Transport(_)));
        let display = surface.last_display();
        assert_eq!(display.tone, Tone::Error);
        assert!(display.message.starts_with("Error: "));
        assert!(display.message.contains("500"));
        assert!(display.message.contains("Internal Server Error"));
    }

    #[tokio::test]
    async fn test_missing_probability_field_fails() {
        let gateway = Arc::new(MockGateway::replying(json!({ "prediction": 1 })));
        let use_case = PredictChurnUseCase::new(gateway);
        let surface = RecordingSurface::default();

        let err = use_case
            .execute_with_surface(&complete_form(), &surface)
            .await
            .unwrap_err();

        assert!(matches!(err, PredictChurnError::ResponseShape(_)));
        assert!(surface.last_display().message.contains("not found"));
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_gateway() {
        let gateway = Arc::new(MockGateway::replying(json!({ "churn_probability": 0.1 })));
        let use_case = PredictChurnUseCase::new(gateway.clone());
        let surface = RecordingSurface::default();
        let form = complete_form().with_value("contract", "Forever");

        let err = use_case
            .execute_with_surface(&form, &surface)
            .await
            .unwrap_err();

        assert!(matches!(err, PredictChurnError::Encoding(_)));
        assert_eq!(gateway.calls(), 0);
        assert!(surface.last_display().message.contains("contract"));
    }

    #[tokio::test]
    async fn test_without_validation_sends_anyway() {
        let gateway = Arc::new(MockGateway::replying(json!({ "churn_probability": 0.1 })));
        let use_case = PredictChurnUseCase::new(gateway.clone())
            .with_params(PredictionParams::default().with_validation(false));

        use_case.execute(&FormSnapshot::new()).await.unwrap();

        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_custom_threshold() {
        let gateway = Arc::new(MockGateway::replying(json!({ "churn_probability": 0.4 })));
        let use_case = PredictChurnUseCase::new(gateway).with_params(
            PredictionParams::default().with_threshold(RiskThreshold::new(0.3).unwrap()),
        );

        let output = use_case.execute(&complete_form()).await.unwrap();
        assert_eq!(output.assessment.level, RiskLevel::High);
    }

    #[tokio::test]
    async fn test_concurrent_invocations_last_write_wins() {
        let slow = PredictChurnUseCase::new(Arc::new(
            MockGateway::replying(json!({ "churn_probability": 0.9 }))
                .with_delay(Duration::from_millis(50)),
        ));
        let fast = PredictChurnUseCase::new(Arc::new(MockGateway::replying(
            json!({ "churn_probability": 0.1 }),
        )));
        let surface = RecordingSurface::default();
        let form = complete_form();

        let (a, b) = tokio::join!(
            slow.execute_with_surface(&form, &surface),
            fast.execute_with_surface(&form, &surface)
        );
        assert!(a.is_ok() && b.is_ok());

        // The slower exchange finished last, so its result is what remains
        assert_eq!(surface.states().len(), 4);
        assert_eq!(surface.last_display().tone, Tone::Alert);
    }

    #[test]
    fn test_encode_respects_validation_flag() {
        let gateway = Arc::new(MockGateway::replying(json!({})));
        let strict = PredictChurnUseCase::new(gateway.clone());
        let lenient = PredictChurnUseCase::new(gateway)
            .with_params(PredictionParams::default().with_validation(false));

        assert!(strict.encode(&FormSnapshot::new()).is_err());
        assert_eq!(
            lenient.encode(&FormSnapshot::new()).unwrap().len(),
            FEATURE_COUNT
        );
    }
}
