pub mod attendance;
pub mod colleges;
pub mod events;
pub mod feedback;
pub mod registrations;
pub mod reports;
pub mod students;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, docs, writes and reports.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let writes = Router::new()
        .route("/colleges", post(colleges::create))
        .route("/students", post(students::create))
        .route("/events", post(events::create))
        .route("/registrations", post(registrations::create))
        .route("/attendance", post(attendance::mark))
        .route("/feedback", post(feedback::submit));

    let reports = Router::new()
        .route("/reports/event-popularity", get(reports::event_popularity))
        .route("/reports/event-stats/:event_id", get(reports::event_stats))
        .route("/reports/student-participation/:student_id", get(reports::student_participation))
        .route("/reports/top-active-students", get(reports::top_active_students));

    public
        .merge(writes)
        .merge(reports)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
