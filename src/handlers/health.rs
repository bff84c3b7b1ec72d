use crate::error::{HealthResponse, UnhealthyResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// Round-trips to the recipe store to verify it is reachable.
/// Returns 200 OK if it is, 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = UnhealthyResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, Json<UnhealthyResponse>)> {
    match state.store.health_check().await {
        Ok(()) => {
            tracing::debug!("Health check passed");
            Ok((
                StatusCode::OK,
                Json(HealthResponse {
                    status: "healthy".to_string(),
                    store: state.config.store_backend.to_string(),
                }),
            ))
        }
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(UnhealthyResponse {
                    status: "unhealthy".to_string(),
                    error: "Cannot reach recipe store".to_string(),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{app_with, json, memory_app, send};
    use crate::store::testing::FailingStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let app = memory_app();

        let (status, body) = send(&app, "GET", routes::HEALTH, None).await;

        assert_eq!(status, StatusCode::OK);
        let response = json(&body);
        assert_eq!(response["status"], "healthy");
        assert_eq!(response["store"], "memory");
    }

    #[tokio::test]
    async fn test_health_endpoint_unhealthy() {
        let app = app_with(Arc::new(FailingStore::new()));

        let (status, body) = send(&app, "GET", routes::HEALTH, None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        let response = json(&body);
        assert_eq!(response["status"], "unhealthy");
        assert!(!response["error"].as_str().unwrap().contains("10.0.0.1"));
    }
}
