//! OpenAPI document; the `*Doc` types mirror the wire shapes of the
//! service inputs and report rows.
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct CollegeCreateDoc { pub name: String }

#[derive(ToSchema)]
pub struct StudentCreateDoc { pub name: String, pub email: String, pub college_id: i32 }

#[derive(ToSchema)]
pub struct EventCreateDoc {
    pub title: String,
    /// Workshop|Fest|Seminar|Hackathon|TechTalk
    pub event_type: String,
    pub starts_at: chrono::DateTime<chrono::FixedOffset>,
    pub ends_at: chrono::DateTime<chrono::FixedOffset>,
    pub college_id: i32,
}

#[derive(ToSchema)]
pub struct RegistrationCreateDoc { pub student_id: i32, pub event_id: i32 }

#[derive(ToSchema)]
pub struct AttendanceCreateDoc { pub registration_id: i32 }

#[derive(ToSchema)]
pub struct FeedbackCreateDoc {
    pub registration_id: i32,
    /// 1..=5
    pub rating: i64,
    pub comment: Option<String>,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct EventPopularityDoc { pub event_id: i32, pub title: String, pub registrations: i64 }

#[derive(ToSchema)]
pub struct EventStatsDoc {
    pub event_id: i32,
    pub registrations: u64,
    pub attendance_percent: f64,
    pub avg_feedback: Option<f64>,
}

#[derive(ToSchema)]
pub struct StudentParticipationDoc { pub student_id: i32, pub events_attended: u64 }

#[derive(ToSchema)]
pub struct ActiveStudentDoc { pub student_id: i32, pub name: String, pub events_attended: i64 }

#[derive(OpenApi)]
#[openapi(
    info(title = "Campus Event Reporting"),
    paths(
        crate::routes::health,
        crate::routes::colleges::create,
        crate::routes::students::create,
        crate::routes::events::create,
        crate::routes::registrations::create,
        crate::routes::attendance::mark,
        crate::routes::feedback::submit,
        crate::routes::reports::event_popularity,
        crate::routes::reports::event_stats,
        crate::routes::reports::student_participation,
        crate::routes::reports::top_active_students,
    ),
    components(
        schemas(
            CollegeCreateDoc,
            StudentCreateDoc,
            EventCreateDoc,
            RegistrationCreateDoc,
            AttendanceCreateDoc,
            FeedbackCreateDoc,
            MessageDoc,
            EventPopularityDoc,
            EventStatsDoc,
            StudentParticipationDoc,
            ActiveStudentDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "colleges"),
        (name = "students"),
        (name = "events"),
        (name = "registrations"),
        (name = "attendance"),
        (name = "feedback"),
        (name = "reports")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/colleges",
            "/students",
            "/events",
            "/registrations",
            "/attendance",
            "/feedback",
            "/reports/event-popularity",
            "/reports/event-stats/{event_id}",
            "/reports/student-participation/{student_id}",
            "/reports/top-active-students",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
