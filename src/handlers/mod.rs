pub mod health;
pub mod root;
pub mod create;
pub mod list;
pub mod get;
pub mod update;
pub mod delete;

pub use health::health_handler;
pub use root::root_handler;
pub use create::create_handler;
pub use list::list_handler;
pub use get::get_handler;
pub use update::update_handler;
pub use delete::delete_handler;

use crate::error::ApiError;
use crate::store;
use mongodb::bson::oid::ObjectId;

/// Identifier format check applied before any store call keyed by id
pub(crate) fn parse_recipe_id(raw: String) -> Result<ObjectId, ApiError> {
    store::parse_object_id(&raw).ok_or(ApiError::MalformedId(raw))
}
