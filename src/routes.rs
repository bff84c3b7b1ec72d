// Route path constants and router assembly

use axum::{
    extract::MatchedPath,
    http::{Request, Response},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::Span;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const RECIPES: &str = "/recipes";
pub const RECIPE_ITEM: &str = "/recipes/{recipeId}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Assemble the full application router
pub fn router(state: AppState) -> Router {
    let public_dir = ServeDir::new(&state.config.public_dir);

    Router::new()
        .route(ROOT, get(handlers::root_handler))
        .route(HEALTH, get(handlers::health_handler))
        .route(
            RECIPES,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            RECIPE_ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .fallback_service(public_dir)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %matched_path,
                    )
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(|response: &Response<_>, latency: Duration, _span: &Span| {
                    let status = response.status().as_u16();
                    if status >= 500 {
                        tracing::error!(
                            status = %status,
                            latency_ms = %latency.as_millis(),
                            "request failed with server error"
                        );
                    } else {
                        tracing::info!(
                            status = %status,
                            latency_ms = %latency.as_millis(),
                            "request completed"
                        );
                    }
                }),
        )
}
