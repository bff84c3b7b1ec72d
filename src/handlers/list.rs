use crate::error::{ApiError, ErrorResponse};
use crate::models::Recipe;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /recipes handler - List every recipe
///
/// No ordering is guaranteed.
#[utoipa::path(
    get,
    path = routes::RECIPES,
    responses(
        (status = 200, description = "All recipes", body = [Recipe]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Recipe>>), ApiError> {
    // Query the store
    let recipes = state.store.find_all().await?;

    tracing::info!("Listed {} recipes", recipes.len());
    Ok((StatusCode::OK, Json(recipes)))
}
