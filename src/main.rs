mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use config::Config;
use state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("recipes_api=info,tower_http=info")),
        )
        .init();

    tracing::info!("recipes-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = store::from_config(&config).await?;

    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    tracing::info!("Swagger UI available at {}", routes::SWAGGER_UI);

    axum::serve(listener, app).await?;
    Ok(())
}
