use crate::error::{ApiError, ErrorResponse};
use crate::models::{Recipe, RecipeFields};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// POST /recipes handler - Create a recipe
///
/// The store assigns the identifier and fills defaults for omitted fields.
/// Malformed bodies and schema violations answer 400 with the reason; any
/// other store failure answers 500.
#[utoipa::path(
    post,
    path = routes::RECIPES,
    request_body = RecipeFields,
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 400, description = "Invalid recipe fields", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "recipes"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecipeFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    // Reject malformed bodies before touching the store
    let Json(fields) = payload?;

    // The store assigns the id and fills defaults
    let recipe = state.store.create(fields).await?;

    tracing::info!("Created recipe with id: {}", recipe.id);
    Ok((StatusCode::CREATED, Json(recipe)))
}
