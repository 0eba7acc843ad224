//! Axum route handler for the Roast API.
//!
//! One request flows through four stages, strictly in order:
//! validate → compose → invoke → assemble. Each stage may fail the request;
//! nothing retries, and no state survives the response.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::roast::composer::{compose, PromptVersion};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoastRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct RoastResponse {
    pub result: String,
}

/// POST /api/roast
///
/// Takes `{"email": string}`, returns `{"result": <markdown>}` with the
/// roast, rewrite, and explanation sections of the active prompt version.
pub async fn handle_roast(
    State(state): State<AppState>,
    payload: Result<Json<RoastRequest>, JsonRejection>,
) -> Result<Json<RoastResponse>, AppError> {
    let email = validate(payload)?;

    let version = PromptVersion::latest();
    let spec = compose(&email, version);

    info!(
        prompt_version = version.name(),
        model = spec.model_id,
        email_chars = email.chars().count(),
        "roast requested"
    );

    let completion = state.generator.generate(&spec).await?;

    match completion.usage {
        Some(usage) => info!(
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "roast generated"
        ),
        None => info!("roast generated"),
    }

    Ok(Json(RoastResponse {
        result: completion.text,
    }))
}

/// The request validator. Malformed JSON, a missing or non-string `email`
/// field, and a whitespace-only email all collapse into the same
/// validation error; the caller always sees one fixed 400 message.
fn validate(payload: Result<Json<RoastRequest>, JsonRejection>) -> Result<String, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let email = request.email.trim();
    if email.is_empty() {
        return Err(AppError::Validation(
            "email is empty after trimming".to_string(),
        ));
    }

    Ok(email.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicU32, Ordering},
        Arc,
    };

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::errors;
    use crate::provider::{
        Completion, OpenAiGenerator, PromptSpec, ProviderError, TextGenerator,
    };
    use crate::routes::build_router;
    use crate::state::AppState;

    enum MockBehavior {
        Reply(&'static str),
        Empty,
        Transport,
    }

    /// Substitute provider. Counts invocations so tests can assert the
    /// exactly-one-call invariant (and the zero-call cases).
    struct MockGenerator {
        behavior: MockBehavior,
        calls: Arc<AtomicU32>,
    }

    #[async_trait]
    impl TextGenerator for MockGenerator {
        async fn generate(&self, _spec: &PromptSpec) -> Result<Completion, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                MockBehavior::Reply(text) => Ok(Completion {
                    text: text.to_string(),
                    usage: None,
                }),
                MockBehavior::Empty => Err(ProviderError::EmptyCompletion),
                MockBehavior::Transport => Err(ProviderError::Api {
                    status: 502,
                    message: "upstream connect error".to_string(),
                }),
            }
        }
    }

    fn app_with_mock(behavior: MockBehavior) -> (Router, Arc<AtomicU32>) {
        let calls = Arc::new(AtomicU32::new(0));
        let state = AppState {
            generator: Arc::new(MockGenerator {
                behavior,
                calls: calls.clone(),
            }),
        };
        (build_router(state), calls)
    }

    async fn post_roast(app: Router, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/roast")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_valid_email_returns_provider_text() {
        let (app, calls) = app_with_mock(MockBehavior::Reply("## Roast\n..."));
        let body = json!({"email": "Hi John, quick question about your API..."});

        let (status, json) = post_roast(app, body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"result": "## Roast\n..."}));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_email_is_400_and_provider_untouched() {
        let (app, calls) = app_with_mock(MockBehavior::Reply("unused"));

        let (status, json) = post_roast(app, json!({"email": ""}).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({"error": errors::VALIDATION_MESSAGE}));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_whitespace_email_is_400_same_message() {
        let (app, calls) = app_with_mock(MockBehavior::Reply("unused"));

        let (status, json) = post_roast(app, json!({"email": "   "}).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({"error": errors::VALIDATION_MESSAGE}));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_email_field_is_400() {
        let (app, calls) = app_with_mock(MockBehavior::Reply("unused"));

        let (status, json) = post_roast(app, json!({"mail": "hello"}).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({"error": errors::VALIDATION_MESSAGE}));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_string_email_is_400() {
        let (app, _) = app_with_mock(MockBehavior::Reply("unused"));

        let (status, json) = post_roast(app, json!({"email": 42}).to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({"error": errors::VALIDATION_MESSAGE}));
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let (app, _) = app_with_mock(MockBehavior::Reply("unused"));

        let (status, json) = post_roast(app, "not json at all".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({"error": errors::VALIDATION_MESSAGE}));
    }

    #[tokio::test]
    async fn test_missing_credential_is_500_configuration() {
        // Real OpenAI backend without a key: fails per request, before any
        // network traffic, and the process keeps serving.
        let state = AppState {
            generator: Arc::new(OpenAiGenerator::new(None)),
        };
        let app = build_router(state);

        let (status, json) = post_roast(app, json!({"email": "hello"}).to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"error": errors::CONFIGURATION_MESSAGE}));
    }

    #[tokio::test]
    async fn test_empty_completion_is_500_generation() {
        let (app, calls) = app_with_mock(MockBehavior::Empty);

        let (status, json) = post_roast(app, json!({"email": "hello"}).to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"error": errors::GENERATION_MESSAGE}));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_500_generic() {
        let (app, calls) = app_with_mock(MockBehavior::Transport);

        let (status, json) = post_roast(app, json!({"email": "hello"}).to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"error": errors::UNKNOWN_MESSAGE}));
        // Provider-internal detail must not leak into the body
        assert!(!json.to_string().contains("upstream connect error"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_email_with_surrounding_whitespace_succeeds() {
        let (app, calls) = app_with_mock(MockBehavior::Reply("ok"));
        let body = json!({"email": "  Hi there, buy my thing  "});

        let (status, json) = post_roast(app, body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"result": "ok"}));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
