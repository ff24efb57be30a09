use axum::{extract::State, Json};
use tracing::info;

use models::college;
use service::{college_service, domain::NewCollege};

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(post, path = "/colleges", tag = "colleges", request_body = crate::openapi::CollegeCreateDoc, responses((status = 200, description = "Created"), (status = 400, description = "Bad Request"), (status = 409, description = "Name already taken")))]
pub async fn create(State(state): State<AppState>, Json(input): Json<NewCollege>) -> Result<Json<college::Model>, JsonApiError> {
    let created = college_service::create_college(&state.db, &input).await?;
    info!(college_id = created.id, "created college");
    Ok(Json(created))
}
