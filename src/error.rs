use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Error response body shared by every 4xx/5xx answer
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Maps request and store failures onto status codes and a `{message}` body.
/// Store failures are logged here and replaced with a generic message so no
/// backend detail reaches the client.
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be read as recipe fields
    InvalidBody(String),
    /// Recipe fields rejected by the store schema
    Validation(String),
    /// Path identifier is not a well-formed ObjectId
    MalformedId(String),
    /// Well-formed identifier with no matching record
    NotFound(String),
    /// Any other store failure
    Store(StoreError),
}

fn no_such_recipe(id: &str) -> String {
    format!("No such recipe with id: {}", id)
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidBody(msg) | ApiError::Validation(msg) => {
                tracing::info!("Rejected recipe payload: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::MalformedId(id) | ApiError::NotFound(id) => {
                (StatusCode::NOT_FOUND, no_such_recipe(&id))
            }
            ApiError::Store(err) => {
                tracing::error!("Recipe store failure: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => ApiError::Validation(msg),
            other => ApiError::Store(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn parts(err: ApiError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_store_failure_hides_detail() {
        let err: ApiError = StoreError::Other(anyhow::anyhow!("socket closed by 10.1.2.3")).into();

        let (status, body) = parts(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal Server Error");
    }

    #[tokio::test]
    async fn test_store_validation_is_bad_request() {
        let err: ApiError =
            StoreError::Validation("Recipe validation failed: title".to_string()).into();

        let (status, body) = parts(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.message.contains("validation"));
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let (status, body) = parts(ApiError::MalformedId("abc".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "No such recipe with id: abc");
    }
}
