use super::*;

/// Tests storing a weather report.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn stores_weather_report() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_conditions_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let station = create_station(db).await?;

    let repo = WeatherReportRepository::new(db);
    let report = repo
        .create(station.id, "rain", 27.5, 12.0, 24.0, "live", Utc::now())
        .await?;

    assert_eq!(report.station_id, station.id);
    assert_eq!(report.condition, "rain");
    assert_eq!(report.rainfall_mm, 12.0);

    Ok(())
}

/// Tests the lookback window.
///
/// Expected: reports older than the window excluded
#[tokio::test]
async fn window_excludes_old_reports() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_conditions_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let station = create_station(db).await?;
    let now = Utc::now();

    let repo = WeatherReportRepository::new(db);
    repo.create(station.id, "sunny", 31.0, 0.0, 8.0, "live", now - Duration::days(3))
        .await?;
    repo.create(station.id, "rain", 26.0, 20.0, 30.0, "live", now - Duration::minutes(30))
        .await?;

    let reports = repo.get_since(station.id, now - Duration::hours(6)).await?;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].condition, "rain");

    Ok(())
}
