//! Persistence interface for recipe records.
//!
//! Handlers only ever talk to a [`RecipeStore`] trait object; the concrete
//! backend is picked from configuration at startup.

pub mod memory;
pub mod mongo;
#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::error::{ErrorKind, WriteFailure};
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

use crate::config::{Config, StoreBackend};
use crate::models::{Recipe, RecipeFields};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// MongoDB's DocumentValidationFailure code
const DOCUMENT_VALIDATION_FAILURE: i32 = 121;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a recipe store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A write violated the recipe schema
    #[error("{0}")]
    Validation(String),

    /// MongoDB driver or server failure
    #[error("Database error: {0}")]
    Database(mongodb::error::Error),

    /// Any other backend failure
    #[error("Store error: {0}")]
    Other(#[from] anyhow::Error),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        let code = match err.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error)) => Some(write_error.code),
            ErrorKind::Command(command_error) => Some(command_error.code),
            _ => None,
        };

        if code == Some(DOCUMENT_VALIDATION_FAILURE) {
            StoreError::Validation(format!("Recipe validation failed: {}", err))
        } else {
            StoreError::Database(err)
        }
    }
}

/// Async persistence operations for recipes.
///
/// Identifiers arrive already parsed, so a malformed path id never reaches a
/// backend. Lookups by id return `None` when no record matches.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn create(&self, fields: RecipeFields) -> StoreResult<Recipe>;

    async fn find_all(&self) -> StoreResult<Vec<Recipe>>;

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Recipe>>;

    async fn update_by_id(&self, id: ObjectId, fields: RecipeFields)
        -> StoreResult<Option<Recipe>>;

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<Option<Recipe>>;

    /// Cheap round trip used by the health endpoint
    async fn health_check(&self) -> StoreResult<()>;
}

/// Identifier format check: exactly 24 hex characters.
pub fn parse_object_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}

/// Schema rules applied before every write, whatever the backend
pub fn validate_fields(fields: &RecipeFields) -> StoreResult<()> {
    fields
        .validate()
        .map_err(|errors| StoreError::Validation(format!("Recipe validation failed: {}", errors)))
}

/// Build the store selected by `RECIPE_STORE`
pub async fn from_config(config: &Config) -> anyhow::Result<Arc<dyn RecipeStore>> {
    match config.store_backend {
        StoreBackend::MongoDb => Ok(Arc::new(MongoStore::from_config(config).await?)),
        StoreBackend::Memory => {
            tracing::info!("Using in-memory recipe store; records are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
