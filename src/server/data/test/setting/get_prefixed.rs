use super::*;

/// Tests the prefix listing used to enumerate webhook channels.
///
/// Expected: only keys under the prefix, ordered by key
#[tokio::test]
async fn lists_keys_under_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AppSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.upsert(
        "alerts.webhook.2".to_string(),
        "https://hooks.example.org/b".to_string(),
    )
    .await?;
    repo.upsert(
        "alerts.webhook.1".to_string(),
        "https://hooks.example.org/a".to_string(),
    )
    .await?;
    repo.upsert("traffic.api_key".to_string(), "secret".to_string())
        .await?;

    let channels = repo.get_prefixed("alerts.webhook.").await?;

    assert_eq!(channels.len(), 2);
    assert_eq!(channels[0].key, "alerts.webhook.1");
    assert_eq!(channels[1].key, "alerts.webhook.2");

    Ok(())
}

/// Tests an empty prefix result.
///
/// Expected: empty vector when nothing matches
#[tokio::test]
async fn empty_when_no_keys_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AppSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.upsert("traffic.endpoint".to_string(), "https://example.org".to_string())
        .await?;

    assert!(repo.get_prefixed("alerts.webhook.").await?.is_empty());

    Ok(())
}
