use super::*;

/// Tests updating only the name.
///
/// Expected: name changes, phone untouched
#[tokio::test]
async fn updates_name_preserving_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let observer = ObserverFactory::new(db).build().await?;

    let repo = ObserverRepository::new(db);
    let updated = repo
        .update_contact(observer.id, Some("New Name".to_string()), None)
        .await?;

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.phone, observer.phone);

    Ok(())
}

/// Tests setting a phone number.
///
/// Expected: phone stored, name untouched
#[tokio::test]
async fn updates_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let observer = ObserverFactory::new(db).build().await?;

    let repo = ObserverRepository::new(db);
    let updated = repo
        .update_contact(observer.id, None, Some(Some("876-555-0199".to_string())))
        .await?;

    assert_eq!(updated.phone, Some("876-555-0199".to_string()));
    assert_eq!(updated.name, observer.name);

    Ok(())
}

/// Tests updating a missing observer.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn errors_on_missing_observer() {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ObserverRepository::new(db);
    let result = repo
        .update_contact(9999, Some("Ghost".to_string()), None)
        .await;

    assert!(result.is_err());
}
