use crate::db::connect_test;
use crate::errors::ModelError;
use crate::{attendance, college, event, feedback, registration, student};
use anyhow::Result;
use chrono::{Duration, Utc};
use uuid::Uuid;

#[tokio::test]
async fn duplicate_college_name_is_conflict() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = connect_test().await?;
    let name = format!("dup_college_{}", Uuid::new_v4());
    college::create(&db, &name).await?;
    let err = college::create(&db, &name).await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn email_unique_per_college_only() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = connect_test().await?;
    let c1 = college::create(&db, &format!("c1_{}", Uuid::new_v4())).await?;
    let c2 = college::create(&db, &format!("c2_{}", Uuid::new_v4())).await?;

    student::create(&db, c1.id, "Alice", "alice@campus.edu").await?;
    let err = student::create(&db, c1.id, "Alice Again", "ALICE@campus.edu").await.unwrap_err();
    assert!(matches!(err, ModelError::Conflict(_)), "got {err:?}");

    // same address at another college is fine
    student::create(&db, c2.id, "Alice", "alice@campus.edu").await?;
    Ok(())
}

#[tokio::test]
async fn student_requires_existing_college() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = connect_test().await?;
    let err = student::create(&db, i32::MAX, "Ghost", "ghost@campus.edu").await.unwrap_err();
    assert!(matches!(err, ModelError::MissingReference(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn one_registration_attendance_and_feedback_per_pair() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = connect_test().await?;
    let c = college::create(&db, &format!("pair_college_{}", Uuid::new_v4())).await?;
    let s = student::create(&db, c.id, "Chandra", "chandra@iisc.ac.in").await?;
    let now = Utc::now();
    let e = event::create(&db, c.id, "Quantum Talk", event::EventType::TechTalk, now.into(), (now + Duration::hours(2)).into()).await?;

    let r = registration::create(&db, s.id, e.id).await?;
    assert!(matches!(registration::create(&db, s.id, e.id).await, Err(ModelError::Conflict(_))));

    attendance::create(&db, r.id).await?;
    assert!(matches!(attendance::create(&db, r.id).await, Err(ModelError::Conflict(_))));

    feedback::create(&db, r.id, 5, Some("Great!")).await?;
    assert!(matches!(feedback::create(&db, r.id, 3, None).await, Err(ModelError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn validation_runs_before_insert() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = connect_test().await?;
    assert!(matches!(college::create(&db, "   ").await, Err(ModelError::Validation(_))));
    assert!(matches!(feedback::create(&db, 1, 9, None).await, Err(ModelError::Validation(_))));

    let c = college::create(&db, &format!("val_college_{}", Uuid::new_v4())).await?;
    let now = Utc::now();
    let inverted = event::create(&db, c.id, "Backwards", event::EventType::Fest, now.into(), (now - Duration::hours(1)).into()).await;
    assert!(matches!(inverted, Err(ModelError::Validation(_))));
    Ok(())
}
