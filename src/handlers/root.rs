use axum::response::Html;

/// GET / handler - static landing page
pub async fn root_handler() -> Html<&'static str> {
    Html("<h1>Recipes API</h1>")
}
