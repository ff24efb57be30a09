use crate::db::connect_test;
use crate::{attendance, college, event, feedback, registration, student};
use anyhow::Result;
use chrono::{Duration, Utc};
use event::EventType;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Test college create and lookup
#[tokio::test]
async fn test_college_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = connect_test().await?;

    let name = format!("college_{}", Uuid::new_v4());
    let created = college::create(&db, &format!("  {name} ")).await?;
    assert_eq!(created.name, name);

    let found = college::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|c| c.id), Some(created.id));

    let by_name = college::find_by_name(&db, &name).await?;
    assert_eq!(by_name.map(|c| c.id), Some(created.id));
    Ok(())
}

/// Test student create and per-college email lookup
#[tokio::test]
async fn test_student_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = connect_test().await?;

    let c = college::create(&db, &format!("student_college_{}", Uuid::new_v4())).await?;
    let email = format!("Student_{}@Campus.edu", Uuid::new_v4().simple());
    let s = student::create(&db, c.id, "Alice", &email).await?;
    assert_eq!(s.college_id, c.id);
    assert_eq!(s.email, email.to_ascii_lowercase());

    let found = student::find_by_email(&db, c.id, &email).await?;
    assert_eq!(found.map(|f| f.id), Some(s.id));

    let by_college = student::Entity::find()
        .filter(student::Column::CollegeId.eq(c.id))
        .all(&db)
        .await?;
    assert_eq!(by_college.len(), 1);
    Ok(())
}

/// Test event create round-trips the enum and timestamps
#[tokio::test]
async fn test_event_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = connect_test().await?;

    let c = college::create(&db, &format!("event_college_{}", Uuid::new_v4())).await?;
    let starts = Utc::now().into();
    let ends = Utc::now() + Duration::hours(2);
    let e = event::create(&db, c.id, "Intro to LLMs", EventType::Seminar, starts, ends.into()).await?;
    assert_eq!(e.event_type, EventType::Seminar);

    let found = event::Entity::find_by_id(e.id).one(&db).await?.expect("event stored");
    assert_eq!(found.title, "Intro to LLMs");
    assert_eq!(found.event_type, EventType::Seminar);
    assert!(found.ends_at > found.starts_at);

    let seminars = event::Entity::find()
        .filter(event::Column::CollegeId.eq(c.id))
        .filter(event::Column::EventType.eq(EventType::Seminar))
        .all(&db)
        .await?;
    assert_eq!(seminars.len(), 1);
    Ok(())
}

/// Test registration with attendance and feedback attached
#[tokio::test]
async fn test_registration_attendance_feedback() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = connect_test().await?;

    let c = college::create(&db, &format!("reg_college_{}", Uuid::new_v4())).await?;
    let s = student::create(&db, c.id, "Bob", "bob@reva.edu").await?;
    let now = Utc::now();
    let e = event::create(&db, c.id, "HackNight", EventType::Hackathon, now.into(), (now + Duration::hours(8)).into()).await?;

    let r = registration::create(&db, s.id, e.id).await?;
    assert_eq!(registration::find_pair(&db, s.id, e.id).await?.map(|x| x.id), Some(r.id));

    assert!(attendance::find_by_registration(&db, r.id).await?.is_none());
    let a = attendance::create(&db, r.id).await?;
    assert_eq!(attendance::find_by_registration(&db, r.id).await?.map(|x| x.id), Some(a.id));

    let f = feedback::create(&db, r.id, 4, Some("  ")).await?;
    assert_eq!(f.rating, 4);
    assert!(f.comment.is_none());
    let stored = feedback::find_by_registration(&db, r.id).await?.expect("feedback stored");
    assert_eq!(stored.id, f.id);
    Ok(())
}
