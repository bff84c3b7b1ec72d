use crate::config::Config;
use crate::store::RecipeStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
    pub config: Arc<Config>,
}
