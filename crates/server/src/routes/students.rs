use axum::{extract::State, Json};
use tracing::info;

use models::student;
use service::{domain::NewStudent, student_service};

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(post, path = "/students", tag = "students", request_body = crate::openapi::StudentCreateDoc, responses((status = 200, description = "Created"), (status = 400, description = "Bad Request"), (status = 404, description = "Unknown college"), (status = 409, description = "Email already used at this college")))]
pub async fn create(State(state): State<AppState>, Json(input): Json<NewStudent>) -> Result<Json<student::Model>, JsonApiError> {
    let created = student_service::create_student(&state.db, &input).await?;
    info!(student_id = created.id, college_id = created.college_id, "created student");
    Ok(Json(created))
}
