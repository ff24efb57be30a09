//! Aggregate reports over registrations, attendance and feedback.
//!
//! Every report is a single grouped select (or a few counts) pushed down to
//! the database; nothing is aggregated in memory.

use sea_orm::{
    sea_query::{Alias, Expr, Func, SimpleExpr},
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use models::{attendance, event, event::EventType, feedback, registration, student};
use crate::errors::ServiceError;

pub const DEFAULT_TOP_LIMIT: u64 = 3;
pub const MAX_TOP_LIMIT: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct EventPopularity {
    pub event_id: i32,
    pub title: String,
    pub registrations: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStats {
    pub event_id: i32,
    pub registrations: u64,
    pub attendance_percent: f64,
    pub avg_feedback: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentParticipation {
    pub student_id: i32,
    pub events_attended: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct ActiveStudent {
    pub student_id: i32,
    pub name: String,
    pub events_attended: i64,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Share of registrations that were attended, in percent with two decimals.
pub fn attendance_percent(attended: u64, registrations: u64) -> f64 {
    if registrations == 0 {
        return 0.0;
    }
    round2(attended as f64 / registrations as f64 * 100.0)
}

/// Clamp a requested ranking size into `1..=MAX_TOP_LIMIT`.
pub fn normalize_limit(limit: Option<i64>) -> u64 {
    match limit {
        None => DEFAULT_TOP_LIMIT,
        Some(n) => n.clamp(1, MAX_TOP_LIMIT as i64) as u64,
    }
}

/// Registrations per event, most popular first. Events without any
/// registration are listed with zero.
#[instrument(skip(db))]
pub async fn event_popularity(
    db: &DatabaseConnection,
    college_id: Option<i32>,
    event_type: Option<EventType>,
) -> Result<Vec<EventPopularity>, ServiceError> {
    let registrations = || Expr::col((registration::Entity, registration::Column::Id)).count();
    let mut query = event::Entity::find()
        .select_only()
        .column_as(event::Column::Id, "event_id")
        .column(event::Column::Title)
        .column_as(registrations(), "registrations")
        .join(JoinType::LeftJoin, registration::Relation::Event.def().rev())
        .group_by(event::Column::Id)
        .group_by(event::Column::Title)
        .order_by_desc(registrations())
        .order_by_asc(event::Column::Id);
    if let Some(cid) = college_id {
        query = query.filter(event::Column::CollegeId.eq(cid));
    }
    if let Some(kind) = event_type {
        query = query.filter(event::Column::EventType.eq(kind));
    }
    let rows = query.into_model::<EventPopularity>().all(db).await?;
    debug!(rows = rows.len(), "event popularity computed");
    Ok(rows)
}

/// Registration count, attendance rate and mean rating for one event.
/// An unknown event reports zero registrations.
#[instrument(skip(db))]
pub async fn event_stats(db: &DatabaseConnection, event_id: i32) -> Result<EventStats, ServiceError> {
    let registrations = registration::Entity::find()
        .filter(registration::Column::EventId.eq(event_id))
        .count(db)
        .await?;

    let attended = attendance::Entity::find()
        .join(JoinType::InnerJoin, attendance::Relation::Registration.def())
        .filter(registration::Column::EventId.eq(event_id))
        .count(db)
        .await?;

    let mean_rating = SimpleExpr::from(Func::avg(Expr::col((feedback::Entity, feedback::Column::Rating))))
        .cast_as(Alias::new("double precision"));
    let avg_feedback = feedback::Entity::find()
        .select_only()
        .column_as(mean_rating, "avg_feedback")
        .join(JoinType::InnerJoin, feedback::Relation::Registration.def())
        .filter(registration::Column::EventId.eq(event_id))
        .into_tuple::<Option<f64>>()
        .one(db)
        .await?
        .flatten()
        .map(round2);

    Ok(EventStats {
        event_id,
        registrations,
        attendance_percent: attendance_percent(attended, registrations),
        avg_feedback,
    })
}

/// Number of events a student actually attended.
#[instrument(skip(db))]
pub async fn student_participation(db: &DatabaseConnection, student_id: i32) -> Result<StudentParticipation, ServiceError> {
    let events_attended = attendance::Entity::find()
        .join(JoinType::InnerJoin, attendance::Relation::Registration.def())
        .filter(registration::Column::StudentId.eq(student_id))
        .count(db)
        .await?;
    Ok(StudentParticipation { student_id, events_attended })
}

/// Students ranked by attended events. Only students with at least one
/// registration are ranked.
#[instrument(skip(db))]
pub async fn top_active_students(
    db: &DatabaseConnection,
    limit: Option<i64>,
    college_id: Option<i32>,
) -> Result<Vec<ActiveStudent>, ServiceError> {
    let attended = || Expr::col((attendance::Entity, attendance::Column::Id)).count();
    let mut query = student::Entity::find()
        .select_only()
        .column_as(student::Column::Id, "student_id")
        .column(student::Column::Name)
        .column_as(attended(), "events_attended")
        .join(JoinType::InnerJoin, registration::Relation::Student.def().rev())
        .join(JoinType::LeftJoin, attendance::Relation::Registration.def().rev())
        .group_by(student::Column::Id)
        .group_by(student::Column::Name)
        .order_by_desc(attended())
        .order_by_asc(student::Column::Id)
        .limit(normalize_limit(limit));
    if let Some(cid) = college_id {
        query = query.filter(student::Column::CollegeId.eq(cid));
    }
    Ok(query.into_model::<ActiveStudent>().all(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, make_college, make_event, make_registration, make_student};
    use models::{attendance, feedback};

    #[test]
    fn percent_rounds_and_handles_zero() {
        assert_eq!(attendance_percent(0, 0), 0.0);
        assert_eq!(attendance_percent(1, 2), 50.0);
        assert_eq!(attendance_percent(1, 3), 33.33);
        assert_eq!(attendance_percent(2, 3), 66.67);
        assert_eq!(attendance_percent(3, 3), 100.0);
    }

    #[test]
    fn limit_is_clamped() {
        assert_eq!(normalize_limit(None), DEFAULT_TOP_LIMIT);
        assert_eq!(normalize_limit(Some(0)), 1);
        assert_eq!(normalize_limit(Some(-5)), 1);
        assert_eq!(normalize_limit(Some(i64::MIN)), 1);
        assert_eq!(normalize_limit(Some(10)), 10);
        assert_eq!(normalize_limit(Some(10_000)), MAX_TOP_LIMIT);
    }

    #[tokio::test]
    async fn reports_over_small_campus() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let c = make_college(&db).await?;
        let alice = make_student(&db, c.id, "Alice").await?;
        let bob = make_student(&db, c.id, "Bob").await?;
        let carol = make_student(&db, c.id, "Carol").await?;
        let seminar = make_event(&db, c.id, "Intro to LLMs", EventType::Seminar).await?;
        let hack = make_event(&db, c.id, "HackNight", EventType::Hackathon).await?;
        let empty = make_event(&db, c.id, "Empty Fest", EventType::Fest).await?;

        let r_alice_sem = make_registration(&db, alice.id, seminar.id).await?;
        let r_bob_sem = make_registration(&db, bob.id, seminar.id).await?;
        let r_carol_sem = make_registration(&db, carol.id, seminar.id).await?;
        let r_bob_hack = make_registration(&db, bob.id, hack.id).await?;

        attendance::create(&db, r_alice_sem.id).await?;
        attendance::create(&db, r_bob_sem.id).await?;
        attendance::create(&db, r_bob_hack.id).await?;

        feedback::create(&db, r_alice_sem.id, 5, Some("Great!")).await?;
        feedback::create(&db, r_bob_sem.id, 4, Some("Nice")).await?;
        feedback::create(&db, r_carol_sem.id, 4, None).await?;

        // popularity, zero-registration events included
        let pop = event_popularity(&db, Some(c.id), None).await?;
        let ranked: Vec<(i32, i64)> = pop.iter().map(|p| (p.event_id, p.registrations)).collect();
        assert_eq!(ranked, vec![(seminar.id, 3), (hack.id, 1), (empty.id, 0)]);
        assert_eq!(pop[0].title, "Intro to LLMs");

        let hackathons = event_popularity(&db, Some(c.id), Some(EventType::Hackathon)).await?;
        assert_eq!(hackathons.len(), 1);
        assert_eq!(hackathons[0].event_id, hack.id);

        // stats
        let stats = event_stats(&db, seminar.id).await?;
        assert_eq!(stats.registrations, 3);
        assert_eq!(stats.attendance_percent, 66.67);
        assert_eq!(stats.avg_feedback, Some(4.33));

        let hack_stats = event_stats(&db, hack.id).await?;
        assert_eq!(hack_stats.attendance_percent, 100.0);
        assert_eq!(hack_stats.avg_feedback, None);

        let none = event_stats(&db, empty.id).await?;
        assert_eq!((none.registrations, none.attendance_percent, none.avg_feedback), (0, 0.0, None));

        // participation
        assert_eq!(student_participation(&db, bob.id).await?.events_attended, 2);
        assert_eq!(student_participation(&db, carol.id).await?.events_attended, 0);

        // ranking
        let top = top_active_students(&db, None, Some(c.id)).await?;
        let order: Vec<(i32, i64)> = top.iter().map(|s| (s.student_id, s.events_attended)).collect();
        assert_eq!(order, vec![(bob.id, 2), (alice.id, 1), (carol.id, 0)]);

        let top1 = top_active_students(&db, Some(1), Some(c.id)).await?;
        assert_eq!(top1.len(), 1);
        assert_eq!(top1[0].name, "Bob");
        Ok(())
    }

    #[tokio::test]
    async fn unregistered_students_are_not_ranked() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
        let db = get_db().await?;
        let c = make_college(&db).await?;
        make_student(&db, c.id, "Idle").await?;
        let top = top_active_students(&db, Some(10), Some(c.id)).await?;
        assert!(top.is_empty());
        Ok(())
    }
}
