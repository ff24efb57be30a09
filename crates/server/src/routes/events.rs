use axum::{extract::State, Json};
use tracing::info;

use models::event;
use service::{domain::NewEvent, event_service};

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(post, path = "/events", tag = "events", request_body = crate::openapi::EventCreateDoc, responses((status = 200, description = "Created"), (status = 400, description = "Bad Request"), (status = 404, description = "Unknown college")))]
pub async fn create(State(state): State<AppState>, Json(input): Json<NewEvent>) -> Result<Json<event::Model>, JsonApiError> {
    let created = event_service::create_event(&state.db, &input).await?;
    info!(event_id = created.id, event_type = %created.event_type, "created event");
    Ok(Json(created))
}
