use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored recipe as returned by every recipe endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Store-assigned ObjectId, rendered as 24 hex characters
    #[serde(rename = "_id")]
    #[schema(example = "652f1c9e8b3e4a0012a4c7d1")]
    pub id: String,
    pub title: String,
    pub instructions: String,
    pub level: Option<String>,
    pub ingredients: Vec<String>,
    pub image: Option<String>,
    /// Preparation time in minutes
    pub duration: Option<f64>,
    pub is_archived: bool,
    pub created: DateTime<Utc>,
}

impl Recipe {
    /// Build a record from client-supplied fields, filling in store defaults
    ///
    /// `created` is kept at millisecond precision, the resolution of a BSON date.
    pub fn from_fields(id: String, fields: RecipeFields) -> Self {
        Recipe {
            id,
            title: fields.title,
            instructions: fields.instructions,
            level: fields.level,
            ingredients: fields.ingredients,
            image: fields.image,
            duration: fields.duration,
            is_archived: fields.is_archived,
            created: fields.created.unwrap_or_else(Utc::now).trunc_subsecs(3),
        }
    }

    /// Replace every field but the identifier. `created` survives unless supplied.
    pub fn apply(&mut self, fields: RecipeFields) {
        self.title = fields.title;
        self.instructions = fields.instructions;
        self.level = fields.level;
        self.ingredients = fields.ingredients;
        self.image = fields.image;
        self.duration = fields.duration;
        self.is_archived = fields.is_archived;
        if let Some(created) = fields.created {
            self.created = created.trunc_subsecs(3);
        }
    }
}

/// Request body for creating or replacing a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecipeFields {
    #[validate(length(min = 1, message = "title must not be empty"))]
    #[schema(example = "Pasta")]
    pub title: String,
    #[validate(length(min = 1, message = "instructions must not be empty"))]
    #[schema(example = "Boil")]
    pub instructions: String,
    #[serde(default)]
    #[schema(example = "Easy")]
    pub level: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, message = "duration must not be negative"))]
    pub duration: Option<f64>,
    #[serde(default)]
    pub is_archived: bool,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}
