use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_recipe_id;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode};

/// DELETE /recipes/{recipeId} handler - Permanently remove a recipe
///
/// Deleting a well-formed id with no matching record still answers 204.
#[utoipa::path(
    delete,
    path = routes::RECIPE_ITEM,
    params(
        ("recipeId" = String, Path, description = "24-character hex ObjectId of the recipe")
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Malformed id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_recipe_id(id_str)?;

    // Nothing to delete is still a success
    match state.store.delete_by_id(id).await? {
        Some(_) => tracing::info!("Deleted recipe with id: {}", id),
        None => tracing::debug!("Delete matched no recipe with id: {}", id),
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{app_with, create, json, memory_app, pasta, send};
    use crate::store::testing::FailingStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_delete_endpoint_success() {
        let app = memory_app();
        let id = create(&app, pasta()).await;

        let (status, body) = send(&app, "DELETE", &format!("/recipes/{}", id), None).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_delete_endpoint_absent_record() {
        let app = memory_app();

        let (status, body) =
            send(&app, "DELETE", "/recipes/652f1c9e8b3e4a0012a4c7d1", None).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_delete_endpoint_malformed_id_skips_store() {
        let store = Arc::new(FailingStore::new());
        let app = app_with(store.clone());

        let (status, body) = send(&app, "DELETE", "/recipes/not-a-valid-id", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json(&body)["message"], "No such recipe with id: not-a-valid-id");
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_endpoint_store_failure() {
        let store = Arc::new(FailingStore::new());
        let app = app_with(store.clone());

        let (status, body) =
            send(&app, "DELETE", "/recipes/652f1c9e8b3e4a0012a4c7d1", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json(&body)["message"], "Internal Server Error");
    }
}
