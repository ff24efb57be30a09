use sea_orm::ConnectionTrait;
use tracing::{info, instrument};

use models::{attendance, errors::ModelError};
use crate::{domain::MarkAttendance, errors::ServiceError, registration_service};

/// Result of marking attendance; marking twice is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum AttendanceOutcome {
    Marked(attendance::Model),
    AlreadyMarked,
}

impl AttendanceOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            AttendanceOutcome::Marked(_) => "Attendance marked",
            AttendanceOutcome::AlreadyMarked => "Already marked",
        }
    }
}

/// Mark attendance for a registration.
#[instrument(skip(db))]
pub async fn mark_attendance(db: &impl ConnectionTrait, input: &MarkAttendance) -> Result<AttendanceOutcome, ServiceError> {
    registration_service::require_registration(db, input.registration_id).await?;
    if attendance::find_by_registration(db, input.registration_id).await?.is_some() {
        return Ok(AttendanceOutcome::AlreadyMarked);
    }
    insert_attendance(db, input.registration_id).await
}

/// Insert the row; a unique-index hit means a concurrent mark won.
async fn insert_attendance(db: &impl ConnectionTrait, registration_id: i32) -> Result<AttendanceOutcome, ServiceError> {
    match attendance::create(db, registration_id).await {
        Ok(m) => {
            info!(attendance_id = m.id, "attendance marked");
            Ok(AttendanceOutcome::Marked(m))
        }
        Err(ModelError::Conflict(_)) => Ok(AttendanceOutcome::AlreadyMarked),
        Err(e) => Err(e.into()),
    }
}
