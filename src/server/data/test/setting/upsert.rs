use super::*;

/// Tests inserting a new setting.
///
/// Expected: Ok with the stored key and value
#[tokio::test]
async fn inserts_new_setting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AppSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    let setting = repo
        .upsert("traffic.endpoint".to_string(), "https://example.org".to_string())
        .await?;

    assert_eq!(setting.key, "traffic.endpoint");
    assert_eq!(setting.value, "https://example.org");

    Ok(())
}

/// Tests replacing an existing setting's value.
///
/// Expected: value replaced, only one row remains
#[tokio::test]
async fn replaces_existing_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AppSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.upsert("ai.model".to_string(), "traffic-analyst-1".to_string())
        .await?;
    let replaced = repo
        .upsert("ai.model".to_string(), "traffic-analyst-2".to_string())
        .await?;

    assert_eq!(replaced.value, "traffic-analyst-2");
    assert_eq!(repo.get_all().await?.len(), 1);

    let stored = repo.get("ai.model").await?.unwrap();
    assert_eq!(stored.value, "traffic-analyst-2");

    Ok(())
}

/// Tests deletion.
///
/// Expected: true when a row was removed, false for a missing key
#[tokio::test]
async fn deletes_setting() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AppSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SettingRepository::new(db);
    repo.upsert("flag.temp".to_string(), "on".to_string())
        .await?;

    assert!(repo.delete("flag.temp").await?);
    assert!(!repo.delete("flag.temp").await?);
    assert!(repo.get("flag.temp").await?.is_none());

    Ok(())
}
