use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{Recipe, RecipeFields};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "recipes-api",
        version = "1.0.0",
        description = "CRUD service for recipe records backed by MongoDB"
    ),
    paths(
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Recipe,
            RecipeFields,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "recipes", description = "Recipe CRUD operations")
    )
)]
pub struct ApiDoc;
