use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_recipe_id;
use crate::models::Recipe;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, extract::Path, http::StatusCode, Json};

/// GET /recipes/{recipeId} handler - Retrieve a single recipe
#[utoipa::path(
    get,
    path = routes::RECIPE_ITEM,
    params(
        ("recipeId" = String, Path, description = "24-character hex ObjectId of the recipe")
    ),
    responses(
        (status = 200, description = "Recipe found", body = Recipe),
        (status = 404, description = "Malformed id or no such recipe", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    // Format check only; a malformed id never reaches the store
    let id = parse_recipe_id(id_str)?;

    // Retrieve the recipe
    match state.store.find_by_id(id).await? {
        Some(recipe) => {
            tracing::info!("Retrieved recipe with id: {}", id);
            Ok((StatusCode::OK, Json(recipe)))
        }
        None => {
            tracing::info!("Recipe not found with id: {}", id);
            Err(ApiError::NotFound(id.to_hex()))
        }
    }
}
