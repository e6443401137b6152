use super::*;

/// Tests toggling the monitoring flag.
///
/// Expected: active column updated both ways
#[tokio::test]
async fn toggles_monitoring_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PollingStation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = PollingStationFactory::new(db).build().await?;

    let repo = StationRepository::new(db);
    repo.set_active(station.id, false).await?;
    assert!(!repo.find_by_id(station.id).await?.unwrap().active);

    repo.set_active(station.id, true).await?;
    assert!(repo.find_by_id(station.id).await?.unwrap().active);

    Ok(())
}

/// Tests the partial field update.
///
/// Expected: provided fields change, others keep their values
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PollingStation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = PollingStationFactory::new(db).build().await?;

    let repo = StationRepository::new(db);
    let updated = repo
        .update(station.id, Some("Renamed Hall".to_string()), None, None, None)
        .await?;

    assert_eq!(updated.name, "Renamed Hall");
    assert_eq!(updated.address, station.address);
    assert_eq!(updated.latitude, station.latitude);

    Ok(())
}
