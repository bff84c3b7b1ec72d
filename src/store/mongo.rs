use anyhow::{Context, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, Document, doc};
use mongodb::options::{ConnectionString, ReturnDocument};
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::{RecipeStore, StoreResult, validate_fields};
use crate::config::Config;
use crate::models::{Recipe, RecipeFields};

/// On-disk shape of a recipe document
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecipeDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    title: String,
    instructions: String,
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(rename = "isArchived", default)]
    is_archived: bool,
    created: bson::DateTime,
}

impl RecipeDocument {
    fn new(id: ObjectId, fields: RecipeFields) -> Self {
        let created = fields.created.unwrap_or_else(Utc::now);
        RecipeDocument {
            id,
            title: fields.title,
            instructions: fields.instructions,
            level: fields.level,
            ingredients: fields.ingredients,
            image: fields.image,
            duration: fields.duration,
            is_archived: fields.is_archived,
            created: to_bson_datetime(created),
        }
    }

    fn into_recipe(self) -> StoreResult<Recipe> {
        let created = DateTime::<Utc>::from_timestamp_millis(self.created.timestamp_millis())
            .ok_or_else(|| anyhow!("Stored timestamp out of range for recipe {}", self.id))?;

        Ok(Recipe {
            id: self.id.to_hex(),
            title: self.title,
            instructions: self.instructions,
            level: self.level,
            ingredients: self.ingredients,
            image: self.image,
            duration: self.duration,
            is_archived: self.is_archived,
            created,
        })
    }
}

fn to_bson_datetime(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

/// `$set` body replacing every client-controlled field
fn update_document(fields: RecipeFields) -> Document {
    let mut set = doc! {
        "title": fields.title,
        "instructions": fields.instructions,
        "level": fields.level,
        "ingredients": fields.ingredients,
        "image": fields.image,
        "duration": fields.duration,
        "isArchived": fields.is_archived,
    };
    if let Some(created) = fields.created {
        set.insert("created", to_bson_datetime(created));
    }
    doc! { "$set": set }
}

/// Server-side schema installed when the collection is first created
fn collection_validator() -> Document {
    doc! {
        "$jsonSchema": {
            "bsonType": "object",
            "required": ["title", "instructions", "ingredients", "isArchived", "created"],
            "properties": {
                "title": { "bsonType": "string", "minLength": 1 },
                "instructions": { "bsonType": "string", "minLength": 1 },
                "level": { "bsonType": ["string", "null"] },
                "ingredients": { "bsonType": "array", "items": { "bsonType": "string" } },
                "image": { "bsonType": ["string", "null"] },
                "duration": { "bsonType": ["double", "int", "long", "null"], "minimum": 0 },
                "isArchived": { "bsonType": "bool" },
                "created": { "bsonType": "date" }
            }
        }
    }
}

/// Recipe store backed by a MongoDB collection
///
/// The client is built on first use and shared by every clone, so a
/// connection string whose hosts cannot be resolved yet does not prevent
/// the store from existing.
#[derive(Clone)]
pub struct MongoStore {
    uri: String,
    database_name: String,
    collection_name: String,
    client: Arc<OnceCell<Client>>,
}

impl MongoStore {
    /// Create a store from configuration
    ///
    /// Only a syntactically invalid connection string is an error here.
    /// Reachability (including SRV/DNS resolution) is checked with a ping
    /// and the outcome logged; an unreachable server does not stop startup
    /// and requests simply fail until it comes back.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        ConnectionString::parse(&config.mongodb_uri)
            .context("Failed to parse MONGODB_URI as a MongoDB connection string")?;

        let store = Self {
            uri: config.mongodb_uri.clone(),
            database_name: config.mongodb_database.clone(),
            collection_name: config.mongodb_collection.clone(),
            client: Arc::new(OnceCell::new()),
        };

        match store.ping().await {
            Ok(()) => {
                tracing::info!(
                    "Connected to MongoDB! Database name: \"{}\"",
                    config.mongodb_database
                );
                if let Err(e) = store.ensure_collection_exists().await {
                    tracing::warn!("Could not provision recipes collection: {:#}", e);
                }
            }
            Err(e) => {
                tracing::error!("Error connecting to MongoDB: {}", e);
            }
        }

        Ok(store)
    }

    /// Build the driver client once; a failed attempt is retried on the next call
    async fn client(&self) -> StoreResult<&Client> {
        let client = self
            .client
            .get_or_try_init(|| Client::with_uri_str(self.uri.as_str()))
            .await?;
        Ok(client)
    }

    async fn database(&self) -> StoreResult<Database> {
        Ok(self.client().await?.database(&self.database_name))
    }

    async fn collection(&self) -> StoreResult<Collection<RecipeDocument>> {
        Ok(self.database().await?.collection(&self.collection_name))
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database().await?.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Create the collection with its schema validator if it is missing
    async fn ensure_collection_exists(&self) -> anyhow::Result<()> {
        let name = self.collection_name.as_str();
        let database = self.database().await?;
        let existing = database
            .list_collection_names()
            .await
            .context("Failed to list collections")?;

        if existing.iter().any(|c| c == name) {
            tracing::info!("Collection '{}' already exists", name);
            return Ok(());
        }

        tracing::info!("Collection '{}' not found, creating...", name);
        database
            .create_collection(name)
            .validator(collection_validator())
            .await
            .context("Failed to create collection")?;

        tracing::info!("Collection '{}' created successfully", name);
        Ok(())
    }
}

#[async_trait]
impl RecipeStore for MongoStore {
    async fn create(&self, fields: RecipeFields) -> StoreResult<Recipe> {
        validate_fields(&fields)?;

        let document = RecipeDocument::new(ObjectId::new(), fields);
        self.collection().await?.insert_one(&document).await?;

        tracing::debug!("Inserted recipe with id: {}", document.id);
        document.into_recipe()
    }

    async fn find_all(&self) -> StoreResult<Vec<Recipe>> {
        let documents: Vec<RecipeDocument> =
            self.collection().await?.find(doc! {}).await?.try_collect().await?;

        tracing::debug!("Loaded {} recipes", documents.len());
        documents.into_iter().map(RecipeDocument::into_recipe).collect()
    }

    async fn find_by_id(&self, id: ObjectId) -> StoreResult<Option<Recipe>> {
        self.collection()
            .await?
            .find_one(doc! { "_id": id })
            .await?
            .map(RecipeDocument::into_recipe)
            .transpose()
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        fields: RecipeFields,
    ) -> StoreResult<Option<Recipe>> {
        validate_fields(&fields)?;

        self.collection()
            .await?
            .find_one_and_update(doc! { "_id": id }, update_document(fields))
            .return_document(ReturnDocument::After)
            .await?
            .map(RecipeDocument::into_recipe)
            .transpose()
    }

    async fn delete_by_id(&self, id: ObjectId) -> StoreResult<Option<Recipe>> {
        self.collection()
            .await?
            .find_one_and_delete(doc! { "_id": id })
            .await?
            .map(RecipeDocument::into_recipe)
            .transpose()
    }

    async fn health_check(&self) -> StoreResult<()> {
        self.ping().await
    }
}
