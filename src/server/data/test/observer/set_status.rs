use super::*;

/// Tests a status transition.
///
/// Expected: status column updated
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let observer = ObserverFactory::new(db).build().await?;

    let repo = ObserverRepository::new(db);
    repo.set_status(observer.id, "active").await?;

    let updated = repo.find_by_id(observer.id).await?.unwrap();
    assert_eq!(updated.status, "active");

    Ok(())
}

/// Tests marking an observer verified.
///
/// Expected: verified column set
#[tokio::test]
async fn marks_verified() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let observer = ObserverFactory::new(db).build().await?;
    assert!(!observer.verified);

    let repo = ObserverRepository::new(db);
    repo.set_verified(observer.id, true).await?;

    let updated = repo.find_by_id(observer.id).await?.unwrap();
    assert!(updated.verified);

    Ok(())
}
