use axum::{extract::State, Json};
use tracing::info;

use common::types::Message;
use service::{attendance_service, domain::MarkAttendance};

use crate::errors::JsonApiError;
use crate::state::AppState;

/// Marking an already-marked registration succeeds with "Already marked".
#[utoipa::path(post, path = "/attendance", tag = "attendance", request_body = crate::openapi::AttendanceCreateDoc, responses((status = 200, description = "Marked or already marked", body = crate::openapi::MessageDoc), (status = 404, description = "Registration not found")))]
pub async fn mark(State(state): State<AppState>, Json(input): Json<MarkAttendance>) -> Result<Json<Message>, JsonApiError> {
    let outcome = attendance_service::mark_attendance(&state.db, &input).await?;
    info!(registration_id = input.registration_id, outcome = outcome.message(), "attendance request");
    Ok(Json(Message::new(outcome.message())))
}
