use axum::{
    extract::{Path, Query, State},
    Json,
};

use service::{
    domain::{PopularityFilter, TopStudentsQuery},
    event_service,
    report_service::{self, ActiveStudent, EventPopularity, EventStats, StudentParticipation},
};

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(get, path = "/reports/event-popularity", tag = "reports",
    params(
        ("college_id" = Option<i32>, Query, description = "Only events of this college"),
        ("event_type" = Option<String>, Query, description = "Workshop|Fest|Seminar|Hackathon|TechTalk")
    ),
    responses((status = 200, description = "Events by registration count", body = [crate::openapi::EventPopularityDoc]), (status = 400, description = "Unknown event type")))]
pub async fn event_popularity(
    State(state): State<AppState>,
    Query(q): Query<PopularityFilter>,
) -> Result<Json<Vec<EventPopularity>>, JsonApiError> {
    let kind = match q.event_type.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(event_service::parse_event_type(raw)?),
        _ => None,
    };
    Ok(Json(report_service::event_popularity(&state.db, q.college_id, kind).await?))
}

#[utoipa::path(get, path = "/reports/event-stats/{event_id}", tag = "reports",
    params(("event_id" = i32, Path, description = "Event id")),
    responses((status = 200, description = "Registrations, attendance rate and mean rating", body = crate::openapi::EventStatsDoc)))]
pub async fn event_stats(State(state): State<AppState>, Path(event_id): Path<i32>) -> Result<Json<EventStats>, JsonApiError> {
    Ok(Json(report_service::event_stats(&state.db, event_id).await?))
}

#[utoipa::path(get, path = "/reports/student-participation/{student_id}", tag = "reports",
    params(("student_id" = i32, Path, description = "Student id")),
    responses((status = 200, description = "Attended event count", body = crate::openapi::StudentParticipationDoc)))]
pub async fn student_participation(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<Json<StudentParticipation>, JsonApiError> {
    Ok(Json(report_service::student_participation(&state.db, student_id).await?))
}

#[utoipa::path(get, path = "/reports/top-active-students", tag = "reports",
    params(
        ("limit" = Option<i64>, Query, description = "Ranking size, default 3, clamped to 1..=100"),
        ("college_id" = Option<i32>, Query, description = "Only students of this college")
    ),
    responses((status = 200, description = "Students by attended events", body = [crate::openapi::ActiveStudentDoc])))]
pub async fn top_active_students(
    State(state): State<AppState>,
    Query(q): Query<TopStudentsQuery>,
) -> Result<Json<Vec<ActiveStudent>>, JsonApiError> {
    Ok(Json(report_service::top_active_students(&state.db, q.limit, q.college_id).await?))
}
