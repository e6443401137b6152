use super::*;

/// Tests the parish filter.
///
/// Expected: only observers from the requested parish
#[tokio::test]
async fn filters_by_parish() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ObserverFactory::new(db).parish("Kingston").build().await?;
    ObserverFactory::new(db).parish("Portland").build().await?;
    ObserverFactory::new(db).parish("Portland").build().await?;

    let repo = ObserverRepository::new(db);
    let (observers, total) = repo.get_paginated(Some("Portland"), None, 0, 10).await?;

    assert_eq!(total, 2);
    assert!(observers.iter().all(|o| o.parish == "Portland"));

    Ok(())
}

/// Tests the status filter.
///
/// Expected: only observers with the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ObserverFactory::new(db).status("active").build().await?;
    ObserverFactory::new(db).status("pending").build().await?;

    let repo = ObserverRepository::new(db);
    let (observers, total) = repo.get_paginated(None, Some("active"), 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(observers[0].status, "active");

    Ok(())
}

/// Tests combining both filters with pagination.
///
/// Expected: filters intersect and total reflects the filtered count
#[tokio::test]
async fn combines_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ObserverFactory::new(db)
        .parish("St. James")
        .status("active")
        .build()
        .await?;
    ObserverFactory::new(db)
        .parish("St. James")
        .status("pending")
        .build()
        .await?;
    ObserverFactory::new(db)
        .parish("Kingston")
        .status("active")
        .build()
        .await?;

    let repo = ObserverRepository::new(db);
    let (observers, total) = repo
        .get_paginated(Some("St. James"), Some("active"), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(observers[0].parish, "St. James");
    assert_eq!(observers[0].status, "active");

    Ok(())
}
