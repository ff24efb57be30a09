use sea_orm::{ConnectionTrait, EntityTrait};
use tracing::{info, instrument};

use models::registration;
use crate::{domain::NewRegistration, errors::ServiceError, event_service, student_service};

/// Register a student for an event; a pair can only be registered once.
#[instrument(skip(db))]
pub async fn register_student(db: &impl ConnectionTrait, input: &NewRegistration) -> Result<registration::Model, ServiceError> {
    student_service::get_student(db, input.student_id)
        .await?
        .ok_or_else(|| ServiceError::not_found_id("student", input.student_id))?;
    event_service::get_event(db, input.event_id)
        .await?
        .ok_or_else(|| ServiceError::not_found_id("event", input.event_id))?;

    if registration::find_pair(db, input.student_id, input.event_id).await?.is_some() {
        return Err(already_registered(input));
    }
    let created = insert_registration(db, input).await?;
    info!(registration_id = created.id, "student registered");
    Ok(created)
}

fn already_registered(input: &NewRegistration) -> ServiceError {
    ServiceError::Conflict(format!("student {} already registered for event {}", input.student_id, input.event_id))
}

/// Insert the pair; a unique-index hit is reported like the pre-check.
async fn insert_registration(db: &impl ConnectionTrait, input: &NewRegistration) -> Result<registration::Model, ServiceError> {
    registration::create(db, input.student_id, input.event_id)
        .await
        .map_err(|e| match ServiceError::from(e) {
            ServiceError::Conflict(_) => already_registered(input),
            other => other,
        })
}

/// Get registration by id.
pub async fn get_registration(db: &impl ConnectionTrait, id: i32) -> Result<Option<registration::Model>, ServiceError> {
    Ok(registration::Entity::find_by_id(id).one(db).await?)
}

/// Get registration by id, failing with `NotFound` when absent.
pub async fn require_registration(db: &impl ConnectionTrait, id: i32) -> Result<registration::Model, ServiceError> {
    get_registration(db, id).await?.ok_or_else(|| ServiceError::not_found_id("registration", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, make_college, make_event, make_student};
    use models::event::EventType;

    #[tokio::test]
    async fn registration_service_rules() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let c = make_college(&db).await?;
        let s = make_student(&db, c.id, "Alice").await?;
        let e = make_event(&db, c.id, "Intro to LLMs", EventType::Seminar).await?;

        let r = register_student(&db, &NewRegistration { student_id: s.id, event_id: e.id }).await?;
        assert_eq!((r.student_id, r.event_id), (s.id, e.id));
        assert_eq!(require_registration(&db, r.id).await?.id, r.id);

        let again = register_student(&db, &NewRegistration { student_id: s.id, event_id: e.id }).await;
        assert!(matches!(again, Err(ServiceError::Conflict(_))));

        let ghost_student = register_student(&db, &NewRegistration { student_id: i32::MAX, event_id: e.id }).await;
        assert!(matches!(ghost_student, Err(ServiceError::NotFound(_))));

        let ghost_event = register_student(&db, &NewRegistration { student_id: s.id, event_id: i32::MAX }).await;
        assert!(matches!(ghost_event, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn racing_insert_reports_conflict() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let c = make_college(&db).await?;
        let s = make_student(&db, c.id, "Esha").await?;
        let e = make_event(&db, c.id, "Spring Fest", EventType::Fest).await?;
        let input = NewRegistration { student_id: s.id, event_id: e.id };

        registration::create(&db, s.id, e.id).await?;
        let late = insert_registration(&db, &input).await;
        assert!(matches!(late, Err(ServiceError::Conflict(ref m)) if m.contains("already registered")));
        Ok(())
    }
}
