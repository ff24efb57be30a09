use sea_orm::{ConnectionTrait, EntityTrait};
use tracing::instrument;

use models::event::{self, EventType};
use crate::{college_service, domain::NewEvent, errors::ServiceError};

/// Parse an event kind as accepted on the wire.
pub fn parse_event_type(raw: &str) -> Result<EventType, ServiceError> {
    Ok(raw.parse::<EventType>()?)
}

/// Create an event for an existing college.
#[instrument(skip(db, input), fields(college_id = input.college_id, event_type = %input.event_type))]
pub async fn create_event(db: &impl ConnectionTrait, input: &NewEvent) -> Result<event::Model, ServiceError> {
    let kind = parse_event_type(&input.event_type)?;
    event::validate_title(&input.title)?;
    event::validate_window(&input.starts_at, &input.ends_at)?;
    college_service::require_college(db, input.college_id).await?;
    Ok(event::create(db, input.college_id, &input.title, kind, input.starts_at, input.ends_at).await?)
}

/// Get event by id.
pub async fn get_event(db: &impl ConnectionTrait, id: i32) -> Result<Option<event::Model>, ServiceError> {
    Ok(event::Entity::find_by_id(id).one(db).await?)
}
