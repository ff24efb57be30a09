use sea_orm::ConnectionTrait;
use tracing::{info, instrument};

use models::feedback;
use crate::{domain::NewFeedback, errors::ServiceError, registration_service};

/// Submit feedback for a registration; only one submission is accepted.
#[instrument(skip(db, input), fields(registration_id = input.registration_id, rating = input.rating))]
pub async fn submit_feedback(db: &impl ConnectionTrait, input: &NewFeedback) -> Result<feedback::Model, ServiceError> {
    let rating = feedback::validate_rating(input.rating)?;
    registration_service::require_registration(db, input.registration_id).await?;

    if feedback::find_by_registration(db, input.registration_id).await?.is_some() {
        return Err(already_submitted());
    }
    let created = insert_feedback(db, input.registration_id, rating, input.comment.as_deref()).await?;
    info!(feedback_id = created.id, "feedback submitted");
    Ok(created)
}

fn already_submitted() -> ServiceError {
    ServiceError::Conflict("Feedback already submitted".into())
}

async fn insert_feedback(
    db: &impl ConnectionTrait,
    registration_id: i32,
    rating: i32,
    comment: Option<&str>,
) -> Result<feedback::Model, ServiceError> {
    feedback::create(db, registration_id, rating, comment).await.map_err(|e| match ServiceError::from(e) {
        ServiceError::Conflict(_) => already_submitted(),
        other => other,
    })
}
