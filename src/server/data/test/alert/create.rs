use super::*;

/// Tests alert creation.
///
/// Expected: Ok with severity stored and no resolution time
#[tokio::test]
async fn creates_unresolved_alert() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_alert_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = create_admin(db).await?;

    let repo = AlertRepository::new(db);
    let alert = repo
        .create(
            "Road closure".to_string(),
            "Mandela Highway blocked near Six Miles".to_string(),
            "warning",
            Some("St. Catherine".to_string()),
            admin.id,
        )
        .await?;

    assert_eq!(alert.severity, "warning");
    assert!(alert.resolved_at.is_none());
    assert_eq!(alert.created_by, admin.id);

    Ok(())
}

/// Tests recording and listing delivery attempts.
///
/// Expected: both attempts stored in order with their outcomes
#[tokio::test]
async fn records_delivery_attempts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_alert_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = create_admin(db).await?;

    let repo = AlertRepository::new(db);
    let alert = repo
        .create(
            "Test".to_string(),
            "Test".to_string(),
            "info",
            None,
            admin.id,
        )
        .await?;

    repo.record_delivery(alert.id, "https://hooks.example.org/a".to_string(), true)
        .await?;
    repo.record_delivery(alert.id, "https://hooks.example.org/b".to_string(), false)
        .await?;

    let deliveries = repo.get_deliveries(alert.id).await?;

    assert_eq!(deliveries.len(), 2);
    assert!(deliveries[0].success);
    assert!(!deliveries[1].success);

    Ok(())
}
