use axum::{extract::State, Json};

use common::types::Message;
use service::{domain::NewFeedback, feedback_service};

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(post, path = "/feedback", tag = "feedback", request_body = crate::openapi::FeedbackCreateDoc, responses((status = 200, description = "Submitted", body = crate::openapi::MessageDoc), (status = 400, description = "Rating out of range"), (status = 404, description = "Registration not found"), (status = 409, description = "Feedback already submitted")))]
pub async fn submit(State(state): State<AppState>, Json(input): Json<NewFeedback>) -> Result<Json<Message>, JsonApiError> {
    feedback_service::submit_feedback(&state.db, &input).await?;
    Ok(Json(Message::new("Feedback submitted")))
}
