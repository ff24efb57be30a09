//! Request inputs shared by the HTTP layer and the seeder.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewCollege {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub college_id: i32,
}

/// `event_type` stays a string here so unknown kinds surface as validation errors.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub event_type: String,
    pub starts_at: DateTime<FixedOffset>,
    pub ends_at: DateTime<FixedOffset>,
    pub college_id: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewRegistration {
    pub student_id: i32,
    pub event_id: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MarkAttendance {
    pub registration_id: i32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewFeedback {
    pub registration_id: i32,
    /// Wider than the column so out-of-range values reach validation.
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PopularityFilter {
    pub college_id: Option<i32>,
    pub event_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TopStudentsQuery {
    /// Signed so that negative sizes are clamped rather than rejected.
    pub limit: Option<i64>,
    pub college_id: Option<i32>,
}
