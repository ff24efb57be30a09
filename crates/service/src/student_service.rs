use sea_orm::{ConnectionTrait, EntityTrait};
use tracing::instrument;

use models::student;
use crate::{college_service, domain::NewStudent, errors::ServiceError};

/// Create a student at an existing college; emails are unique per college.
#[instrument(skip(db, input), fields(college_id = input.college_id))]
pub async fn create_student(db: &impl ConnectionTrait, input: &NewStudent) -> Result<student::Model, ServiceError> {
    student::validate_name(&input.name)?;
    student::validate_email(&input.email)?;
    college_service::require_college(db, input.college_id).await?;
    if student::find_by_email(db, input.college_id, &input.email).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "email {} already registered at college {}",
            student::normalize_email(&input.email),
            input.college_id
        )));
    }
    Ok(student::create(db, input.college_id, &input.name, &input.email).await?)
}

/// Get student by id.
pub async fn get_student(db: &impl ConnectionTrait, id: i32) -> Result<Option<student::Model>, ServiceError> {
    Ok(student::Entity::find_by_id(id).one(db).await?)
}
