use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{RecipeStore, StoreResult, validate_fields};
use crate::models::{Recipe, RecipeFields};

/// Process-local recipe store keyed by generated ObjectIds
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<ObjectId, Recipe>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn create(&self, fields: RecipeFields) -> StoreResult<Recipe> {
        validate_fields(&fields)?;

        let id = ObjectId::new();
        let recipe = Recipe::from_fields(id.to_hex(), fields);
        self.records.write().await.insert(id, recipe.clone());

        tracing::debug!("Created recipe with id: {}", id);
        Ok(recipe)
    }

    async fn find_all(&self) -> StoreResult<Vec<Recipe>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Recipe>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        fields: RecipeFields,
    ) -> StoreResult<Option<Recipe>> {
        validate_fields(&fields)?;

        let mut records = self.records.write().await;
        Ok(records.get_mut(&id).map(|recipe| {
            recipe.apply(fields);
            recipe.clone()
        }))
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<Option<Recipe>> {
        Ok(self.records.write().await.remove(&id))
    }

    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }
}
