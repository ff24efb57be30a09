#![cfg(test)]
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use models::{college, event, registration, student};

/// Migrated connection; see `models::db::connect_test` for backend selection.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_test().await
}

pub async fn make_college(db: &DatabaseConnection) -> Result<college::Model, anyhow::Error> {
    Ok(college::create(db, &format!("svc_college_{}", Uuid::new_v4())).await?)
}

pub async fn make_student(db: &DatabaseConnection, college_id: i32, name: &str) -> Result<student::Model, anyhow::Error> {
    let email = format!("{}_{}@campus.edu", name.to_lowercase(), Uuid::new_v4().simple());
    Ok(student::create(db, college_id, name, &email).await?)
}

pub async fn make_event(db: &DatabaseConnection, college_id: i32, title: &str, kind: event::EventType) -> Result<event::Model, anyhow::Error> {
    let now = Utc::now();
    Ok(event::create(db, college_id, title, kind, now.into(), (now + Duration::hours(2)).into()).await?)
}

pub async fn make_registration(db: &DatabaseConnection, student_id: i32, event_id: i32) -> Result<registration::Model, anyhow::Error> {
    Ok(registration::create(db, student_id, event_id).await?)
}
