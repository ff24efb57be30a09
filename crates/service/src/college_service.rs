use sea_orm::{ConnectionTrait, EntityTrait};
use tracing::instrument;

use models::college;
use crate::{domain::NewCollege, errors::ServiceError};

/// Create a college; names are unique.
#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_college(db: &impl ConnectionTrait, input: &NewCollege) -> Result<college::Model, ServiceError> {
    college::validate_name(&input.name)?;
    if college::find_by_name(db, &input.name).await?.is_some() {
        return Err(ServiceError::Conflict(format!("college '{}' already exists", input.name.trim())));
    }
    Ok(college::create(db, &input.name).await?)
}

/// Get college by id.
pub async fn get_college(db: &impl ConnectionTrait, id: i32) -> Result<Option<college::Model>, ServiceError> {
    Ok(college::Entity::find_by_id(id).one(db).await?)
}

/// Get college by id, failing with `NotFound` when absent.
pub async fn require_college(db: &impl ConnectionTrait, id: i32) -> Result<college::Model, ServiceError> {
    get_college(db, id).await?.ok_or_else(|| ServiceError::not_found_id("college", id))
}
