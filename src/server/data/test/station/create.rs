use super::*;

/// Tests that new stations start with monitoring enabled.
///
/// Expected: Ok with active set
#[tokio::test]
async fn creates_station_with_monitoring_enabled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PollingStation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StationRepository::new(db);
    let station = repo
        .create(
            "KGN-0001".to_string(),
            "Holy Trinity Cathedral".to_string(),
            "Kingston".to_string(),
            "1 George Headley Drive".to_string(),
            17.9714,
            -76.7932,
        )
        .await?;

    assert!(station.active);
    assert_eq!(station.station_code, "KGN-0001");

    Ok(())
}

/// Tests station code uniqueness and lookup.
///
/// Expected: duplicate code rejected, lookup finds the original
#[tokio::test]
async fn station_codes_are_unique() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PollingStation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let station = PollingStationFactory::new(db)
        .station_code("STA-7777")
        .build()
        .await?;

    let repo = StationRepository::new(db);
    let found = repo.find_by_code("STA-7777").await?;
    assert_eq!(found.map(|s| s.id), Some(station.id));

    let duplicate = repo
        .create(
            "STA-7777".to_string(),
            "Duplicate".to_string(),
            "Kingston".to_string(),
            "Somewhere".to_string(),
            17.98,
            -76.80,
        )
        .await;
    assert!(duplicate.is_err());

    Ok(())
}
