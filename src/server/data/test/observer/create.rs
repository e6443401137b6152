use super::*;

/// Tests that a freshly registered observer starts pending and unverified.
///
/// Expected: Ok with pending status, unverified, no station
#[tokio::test]
async fn creates_observer_with_registration_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ObserverRepository::new(db);
    let observer = repo
        .create(
            "OBS-000123".to_string(),
            "Marcia Brown".to_string(),
            "marcia@caffe.org.jm".to_string(),
            Some("876-555-0101".to_string()),
            "St. Ann".to_string(),
        )
        .await?;

    assert_eq!(observer.badge_number, "OBS-000123");
    assert_eq!(observer.status, "pending");
    assert!(!observer.verified);
    assert!(observer.station_id.is_none());
    assert_eq!(observer.parish, "St. Ann");

    Ok(())
}

/// Tests that the unique email constraint rejects duplicate registrations.
///
/// Expected: Err on second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ObserverRepository::new(db);
    repo.create(
        "OBS-000001".to_string(),
        "First".to_string(),
        "same@caffe.org.jm".to_string(),
        None,
        "Kingston".to_string(),
    )
    .await?;

    let result = repo
        .create(
            "OBS-000002".to_string(),
            "Second".to_string(),
            "same@caffe.org.jm".to_string(),
            None,
            "Kingston".to_string(),
        )
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests badge number lookup.
///
/// Expected: Ok(Some) for stored badge, Ok(None) otherwise
#[tokio::test]
async fn finds_observer_by_badge_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let observer = ObserverFactory::new(db).build().await?;

    let repo = ObserverRepository::new(db);
    let found = repo.find_by_badge_number(&observer.badge_number).await?;
    assert_eq!(found.map(|o| o.id), Some(observer.id));

    assert!(repo.find_by_badge_number("OBS-999999").await?.is_none());

    Ok(())
}
