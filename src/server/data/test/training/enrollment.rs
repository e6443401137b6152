use super::*;
use chrono::Utc;

/// Tests enrollment creation defaults.
///
/// Expected: enrolled status, no score, no completion time
#[tokio::test]
async fn creates_open_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = create_course(db).await?;
    let observer = create_observer(db).await?;

    let repo = EnrollmentRepository::new(db);
    let enrollment = repo.create(observer.id, course.id).await?;

    assert_eq!(enrollment.status, "enrolled");
    assert!(enrollment.score.is_none());
    assert!(enrollment.completed_at.is_none());

    Ok(())
}

/// Tests that find_open only matches unscored enrollments.
///
/// Expected: open enrollment found, closed one invisible
#[tokio::test]
async fn find_open_ignores_closed_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = create_course(db).await?;
    let observer = create_observer(db).await?;

    let repo = EnrollmentRepository::new(db);
    let enrollment = repo.create(observer.id, course.id).await?;

    assert!(repo.find_open(observer.id, course.id).await?.is_some());

    repo.record_result(enrollment.id, 40, "failed", Utc::now())
        .await?;

    // Failed attempt closed; a re-enrollment would be allowed
    assert!(repo.find_open(observer.id, course.id).await?.is_none());

    Ok(())
}

/// Tests recording a result.
///
/// Expected: score, status, and completion time stored
#[tokio::test]
async fn records_result() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = create_course(db).await?;
    let observer = create_observer(db).await?;

    let repo = EnrollmentRepository::new(db);
    let enrollment = repo.create(observer.id, course.id).await?;

    let updated = repo
        .record_result(enrollment.id, 85, "completed", Utc::now())
        .await?;

    assert_eq!(updated.score, Some(85));
    assert_eq!(updated.status, "completed");
    assert!(updated.completed_at.is_some());

    Ok(())
}

/// Tests listing an observer's enrollments.
///
/// Expected: all of the observer's enrollments, none of anyone else's
#[tokio::test]
async fn lists_enrollments_by_observer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course_a = create_course(db).await?;
    let course_b = create_course(db).await?;
    let observer = create_observer(db).await?;
    let other = create_observer(db).await?;

    let repo = EnrollmentRepository::new(db);
    repo.create(observer.id, course_a.id).await?;
    repo.create(observer.id, course_b.id).await?;
    repo.create(other.id, course_a.id).await?;

    let enrollments = repo.get_by_observer(observer.id).await?;

    assert_eq!(enrollments.len(), 2);
    assert!(enrollments.iter().all(|e| e.observer_id == observer.id));

    Ok(())
}
