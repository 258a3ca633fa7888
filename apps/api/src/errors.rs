use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::favorites::storage::StorageError;
use crate::generation::error::GenerationError;

/// Message returned for every generation failure past validation.
pub const GENERATION_FAILED: &str = "Failed to generate newsletter names";
/// Message returned for every favorites storage failure.
pub const STORAGE_FAILED: &str = "Failed to access favorites";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(vec![rejection.body_text()])
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Invalid request",
                    "details": details,
                }),
            ),
            AppError::Generation(e) => {
                tracing::error!(kind = e.kind(), "Generation error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": GENERATION_FAILED }),
                )
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": STORAGE_FAILED }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal server error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_carries_details() {
        let response =
            AppError::Validation(vec!["topic: must be at least 2 characters".into()])
                .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid request");
        assert_eq!(body["details"][0], "topic: must be at least 2 characters");
    }

    #[tokio::test]
    async fn test_generation_errors_are_opaque() {
        let errors = [
            GenerationError::EmptyResponse,
            GenerationError::Format {
                block: 2,
                reason: "missing Score line".into(),
            },
            GenerationError::CountMismatch {
                expected: 5,
                actual: 4,
            },
            GenerationError::Llm(LlmError::Api {
                status: 401,
                message: "Incorrect API key provided: sk-secret".into(),
            }),
        ];
        for err in errors {
            let response = AppError::from(err).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = body_json(response).await;
            assert_eq!(body, json!({ "error": GENERATION_FAILED }));
        }
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response =
            AppError::from(anyhow::anyhow!("join error: task panicked")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(!body["error"].as_str().unwrap().contains("panicked"));
    }

    #[tokio::test]
    async fn test_storage_error_is_opaque() {
        let response = AppError::from(StorageError::Poisoned).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": STORAGE_FAILED }));
    }
}
