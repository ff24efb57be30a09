use axum::{extract::State, Json};

use models::registration;
use service::{domain::NewRegistration, registration_service};

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(post, path = "/registrations", tag = "registrations", request_body = crate::openapi::RegistrationCreateDoc, responses((status = 200, description = "Registered"), (status = 404, description = "Unknown student or event"), (status = 409, description = "Already registered")))]
pub async fn create(State(state): State<AppState>, Json(input): Json<NewRegistration>) -> Result<Json<registration::Model>, JsonApiError> {
    Ok(Json(registration_service::register_student(&state.db, &input).await?))
}
