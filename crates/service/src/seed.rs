//! Demo data for local runs: two colleges, a few students and events,
//! with registrations, attendance and feedback on top.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde::Serialize;
use tracing::info;

use models::college;
use crate::{
    attendance_service, college_service,
    domain::{MarkAttendance, NewCollege, NewEvent, NewFeedback, NewRegistration, NewStudent},
    errors::ServiceError,
    event_service, feedback_service, registration_service, student_service,
};

/// Counts of rows inserted by [`seed_demo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub skipped: bool,
    pub colleges: usize,
    pub students: usize,
    pub events: usize,
    pub registrations: usize,
    pub attendance: usize,
    pub feedback: usize,
}

const MARKER_COLLEGE: &str = "REVA University";

fn event_input(title: &str, kind: &str, starts_at: DateTime<FixedOffset>, hours: i64, college_id: i32) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        event_type: kind.to_string(),
        starts_at,
        ends_at: starts_at + Duration::hours(hours),
        college_id,
    }
}

/// Insert the demo data set in one transaction. Returns a skipped summary
/// when the marker college already exists; a failed run leaves nothing behind.
pub async fn seed_demo(db: &DatabaseConnection) -> Result<SeedSummary, ServiceError> {
    let txn = db.begin().await?;
    let summary = seed_into(&txn).await?;
    txn.commit().await?;
    Ok(summary)
}

async fn seed_into(db: &impl ConnectionTrait) -> Result<SeedSummary, ServiceError> {
    if college::find_by_name(db, MARKER_COLLEGE).await?.is_some() {
        info!(event = "seed_skipped", college = MARKER_COLLEGE, "demo data already present");
        return Ok(SeedSummary { skipped: true, ..Default::default() });
    }
    let mut summary = SeedSummary::default();

    let reva = college_service::create_college(db, &NewCollege { name: MARKER_COLLEGE.into() }).await?;
    let iisc = college_service::create_college(db, &NewCollege { name: "IISc Bangalore".into() }).await?;
    summary.colleges = 2;

    let students = [
        ("Alice", "alice@reva.edu", reva.id),
        ("Bob", "bob@reva.edu", reva.id),
        ("Chandra", "chandra@iisc.ac.in", iisc.id),
    ];
    let mut student_ids = Vec::with_capacity(students.len());
    for (name, email, college_id) in students {
        let s = student_service::create_student(
            db,
            &NewStudent { name: name.into(), email: email.into(), college_id },
        )
        .await?;
        student_ids.push(s.id);
    }
    summary.students = student_ids.len();

    let now = Utc::now().fixed_offset();
    let events = [
        event_input("Intro to LLMs", "Seminar", now, 2, reva.id),
        event_input("HackNight 2025", "Hackathon", now + Duration::days(1), 8, reva.id),
        event_input("Quantum Talk", "TechTalk", now + Duration::days(2), 2, iisc.id),
    ];
    let mut event_ids = Vec::with_capacity(events.len());
    for input in &events {
        event_ids.push(event_service::create_event(db, input).await?.id);
    }
    summary.events = event_ids.len();

    let pairs = [(0, 0), (1, 0), (1, 1), (2, 2)];
    let mut registration_ids = Vec::with_capacity(pairs.len());
    for (s, e) in pairs {
        let r = registration_service::register_student(
            db,
            &NewRegistration { student_id: student_ids[s], event_id: event_ids[e] },
        )
        .await?;
        registration_ids.push(r.id);
    }
    summary.registrations = registration_ids.len();

    for idx in [0, 2] {
        attendance_service::mark_attendance(db, &MarkAttendance { registration_id: registration_ids[idx] }).await?;
        summary.attendance += 1;
    }

    for (idx, rating, comment) in [(0, 5, "Great!"), (1, 4, "Nice")] {
        feedback_service::submit_feedback(
            db,
            &NewFeedback { registration_id: registration_ids[idx], rating, comment: Some(comment.into()) },
        )
        .await?;
        summary.feedback += 1;
    }

    info!(
        event = "seed_done",
        colleges = summary.colleges,
        students = summary.students,
        events = summary.events,
        registrations = summary.registrations,
        "seeded demo data"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_service;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seed_populates_once() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        // Seeding uses fixed names, so it only runs against a private database
        if std::env::var("TEST_DATABASE_URL").is_ok() { return Ok(()); }
        let db = get_db().await?;

        let first = seed_demo(&db).await?;
        assert_eq!(
            first,
            SeedSummary { skipped: false, colleges: 2, students: 3, events: 3, registrations: 4, attendance: 2, feedback: 2 }
        );

        let second = seed_demo(&db).await?;
        assert!(second.skipped);

        let pop = report_service::event_popularity(&db, None, None).await?;
        assert_eq!(pop[0].title, "Intro to LLMs");
        assert_eq!(pop[0].registrations, 2);

        let stats = report_service::event_stats(&db, pop[0].event_id).await?;
        assert_eq!(stats.attendance_percent, 50.0);
        assert_eq!(stats.avg_feedback, Some(4.5));
        Ok(())
    }

    #[tokio::test]
    async fn failed_seed_rolls_back() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        if std::env::var("TEST_DATABASE_URL").is_ok() { return Ok(()); }
        let db = get_db().await?;
        // second demo college already taken, so the run fails after the marker insert
        college::create(&db, "IISc Bangalore").await?;

        let failed = seed_demo(&db).await;
        assert!(matches!(failed, Err(ServiceError::Conflict(_))));
        assert!(college::find_by_name(&db, MARKER_COLLEGE).await?.is_none());
        Ok(())
    }
}
