use crate::error::{ApiError, ErrorResponse};
use crate::handlers::parse_recipe_id;
use crate::models::{Recipe, RecipeFields};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection, extract::Path, extract::State, http::StatusCode, Json,
};

/// PUT /recipes/{recipeId} handler - Replace a recipe's fields
///
/// The identifier is preserved. `created` keeps its stored value unless the
/// body supplies one.
#[utoipa::path(
    put,
    path = routes::RECIPE_ITEM,
    params(
        ("recipeId" = String, Path, description = "24-character hex ObjectId of the recipe")
    ),
    request_body = RecipeFields,
    responses(
        (status = 200, description = "Recipe updated", body = Recipe),
        (status = 400, description = "Invalid recipe fields", body = ErrorResponse),
        (status = 404, description = "Malformed id or no such recipe", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<RecipeFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    // Validate the id before the body so a bad id is always a 404
    let id = parse_recipe_id(id_str)?;
    let Json(fields) = payload?;

    match state.store.update_by_id(id, fields).await? {
        Some(recipe) => {
            tracing::info!("Updated recipe with id: {}", id);
            Ok((StatusCode::OK, Json(recipe)))
        }
        None => {
            tracing::info!("Recipe not found for update with id: {}", id);
            Err(ApiError::NotFound(id.to_hex()))
        }
    }
}
