use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::provider::ProviderError;

/// Fixed message for every validation failure, regardless of what exactly
/// was wrong with the body. Part of the public contract.
pub const VALIDATION_MESSAGE: &str = "Please provide a cold email to roast";
pub const CONFIGURATION_MESSAGE: &str = "OpenAI API key is not configured";
pub const GENERATION_MESSAGE: &str = "Failed to generate response";
pub const UNKNOWN_MESSAGE: &str = "An error occurred while processing your request";

/// Application-level error taxonomy.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The caller only ever sees the fixed per-category message; the detail
/// carried in each variant goes to the log sink and nowhere else.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing input. The only client-caused (4xx) category.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Deployment/environment defect (missing provider credential).
    /// Fatal for this request only; the process keeps serving.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider completed the call but returned no usable output.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Anything else — transport failures, provider API errors.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingCredential => {
                AppError::Configuration("provider credential is not set".to_string())
            }
            ProviderError::EmptyCompletion => {
                AppError::Generation("provider returned empty content".to_string())
            }
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(detail) => {
                tracing::debug!("validation rejected: {detail}");
                (StatusCode::BAD_REQUEST, VALIDATION_MESSAGE)
            }
            AppError::Configuration(detail) => {
                tracing::error!("configuration error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, CONFIGURATION_MESSAGE)
            }
            AppError::Generation(detail) => {
                tracing::error!("generation error: {detail}");
                (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_MESSAGE)
            }
            AppError::Internal(err) => {
                tracing::error!("unexpected error: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, UNKNOWN_MESSAGE)
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_validation_is_400() {
        assert_eq!(
            status_of(AppError::Validation("empty email".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_configuration_is_500() {
        assert_eq!(
            status_of(AppError::Configuration("no key".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_generation_is_500() {
        assert_eq!(
            status_of(AppError::Generation("empty".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_is_500() {
        assert_eq!(
            status_of(AppError::Internal(anyhow::anyhow!("boom"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_credential_maps_to_configuration() {
        let err: AppError = ProviderError::MissingCredential.into();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn test_empty_completion_maps_to_generation() {
        let err: AppError = ProviderError::EmptyCompletion.into();
        assert!(matches!(err, AppError::Generation(_)));
    }

    #[test]
    fn test_api_error_maps_to_internal() {
        let err: AppError = ProviderError::Api {
            status: 503,
            message: "overloaded".into(),
        }
        .into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
