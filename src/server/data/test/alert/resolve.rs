use super::*;

/// Tests resolving an alert.
///
/// Expected: resolved_at stamped
#[tokio::test]
async fn stamps_resolution_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_alert_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = create_admin(db).await?;

    let repo = AlertRepository::new(db);
    let alert = repo
        .create(
            "Flooding".to_string(),
            "Water rising at station".to_string(),
            "critical",
            Some("Portland".to_string()),
            admin.id,
        )
        .await?;

    repo.resolve(alert.id).await?;

    let updated = repo.find_by_id(alert.id).await?.unwrap();
    assert!(updated.resolved_at.is_some());

    Ok(())
}
