use super::*;

/// Tests the active filter and code ordering.
///
/// Expected: inactive stations excluded, results ordered by code
#[tokio::test]
async fn filters_by_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PollingStation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PollingStationFactory::new(db)
        .station_code("B-002")
        .build()
        .await?;
    PollingStationFactory::new(db)
        .station_code("A-001")
        .build()
        .await?;
    PollingStationFactory::new(db)
        .station_code("C-003")
        .active(false)
        .build()
        .await?;

    let repo = StationRepository::new(db);
    let (stations, total) = repo.get_paginated(None, Some(true), 0, 10).await?;

    assert_eq!(total, 2);
    let codes: Vec<&str> = stations.iter().map(|s| s.station_code.as_str()).collect();
    assert_eq!(codes, vec!["A-001", "B-002"]);

    Ok(())
}

/// Tests the parish filter.
///
/// Expected: only stations from the requested parish
#[tokio::test]
async fn filters_by_parish() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PollingStation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PollingStationFactory::new(db).parish("Trelawny").build().await?;
    PollingStationFactory::new(db).parish("Kingston").build().await?;

    let repo = StationRepository::new(db);
    let (stations, total) = repo.get_paginated(Some("Trelawny"), None, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(stations[0].parish, "Trelawny");

    Ok(())
}

/// Tests the all-active listing used by the conditions collector.
///
/// Expected: only active stations, all of them
#[tokio::test]
async fn lists_all_active_stations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PollingStation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PollingStationFactory::new(db).build().await?;
    PollingStationFactory::new(db).build().await?;
    PollingStationFactory::new(db).active(false).build().await?;

    let repo = StationRepository::new(db);
    let active = repo.get_all_active().await?;

    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|s| s.active));

    Ok(())
}
