use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{RecipeStore, StoreError, StoreResult};
use crate::models::{Recipe, RecipeFields};

/// Store whose every operation fails, counting how often it was called
#[derive(Default)]
pub struct FailingStore {
    calls: AtomicUsize,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> StoreResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Other(anyhow::anyhow!(
            "connection refused: mongodb://10.0.0.1:27017"
        )))
    }
}

#[async_trait]
impl RecipeStore for FailingStore {
    async fn create(&self, _fields: RecipeFields) -> StoreResult<Recipe> {
        self.fail()
    }

    async fn find_all(&self) -> StoreResult<Vec<Recipe>> {
        self.fail()
    }

    async fn find_by_id(&self, _id: ObjectId) -> StoreResult<Option<Recipe>> {
        self.fail()
    }

    async fn update_by_id(
        &self,
        _id: ObjectId,
        _fields: RecipeFields,
    ) -> StoreResult<Option<Recipe>> {
        self.fail()
    }

    async fn delete_by_id(&self, _id: ObjectId) -> StoreResult<Option<Recipe>> {
        self.fail()
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.fail()
    }
}
