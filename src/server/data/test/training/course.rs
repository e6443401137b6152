use super::*;

/// Tests course creation defaults.
///
/// Expected: Ok with active set and the given passing score
#[tokio::test]
async fn creates_active_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let course = repo
        .create(
            "Polling Procedures".to_string(),
            Some("Station opening and closing procedures".to_string()),
            80,
        )
        .await?;

    assert!(course.active);
    assert_eq!(course.passing_score, 80);

    Ok(())
}

/// Tests the active-only listing.
///
/// Expected: inactive courses excluded when requested, included otherwise
#[tokio::test]
async fn lists_courses_with_active_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    TrainingCourseFactory::new(db).build().await?;
    TrainingCourseFactory::new(db).active(false).build().await?;

    let repo = CourseRepository::new(db);
    assert_eq!(repo.get_all(true).await?.len(), 1);
    assert_eq!(repo.get_all(false).await?.len(), 2);

    Ok(())
}

/// Tests the partial course update.
///
/// Expected: provided fields change, others keep their values
#[tokio::test]
async fn updates_passing_score_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = create_course(db).await?;

    let repo = CourseRepository::new(db);
    let updated = repo.update(course.id, None, None, Some(90)).await?;

    assert_eq!(updated.passing_score, 90);
    assert_eq!(updated.title, course.title);

    Ok(())
}

/// Tests enrollment history detection.
///
/// Expected: false before any enrollment, true after
#[tokio::test]
async fn detects_enrollment_history() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_training_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = create_course(db).await?;
    let observer = create_observer(db).await?;

    let course_repo = CourseRepository::new(db);
    assert!(!course_repo.has_enrollments(course.id).await?);

    EnrollmentRepository::new(db)
        .create(observer.id, course.id)
        .await?;
    assert!(course_repo.has_enrollments(course.id).await?);

    Ok(())
}
