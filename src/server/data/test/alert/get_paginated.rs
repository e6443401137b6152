use super::*;

/// Tests the unresolved filter.
///
/// Expected: resolved alerts excluded when requested
#[tokio::test]
async fn filters_unresolved_alerts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_alert_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = create_admin(db).await?;

    let repo = AlertRepository::new(db);
    let resolved = repo
        .create(
            "Resolved".to_string(),
            "Done".to_string(),
            "info",
            None,
            admin.id,
        )
        .await?;
    repo.resolve(resolved.id).await?;

    repo.create(
        "Open".to_string(),
        "Still active".to_string(),
        "critical",
        None,
        admin.id,
    )
    .await?;

    let (unresolved, total) = repo.get_paginated(true, 0, 10).await?;
    assert_eq!(total, 1);
    assert_eq!(unresolved[0].title, "Open");

    let (all, all_total) = repo.get_paginated(false, 0, 10).await?;
    assert_eq!(all_total, 2);
    assert_eq!(all.len(), 2);

    Ok(())
}
