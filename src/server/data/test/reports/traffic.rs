use super::*;

/// Tests storing a traffic report.
///
/// Expected: Ok with all fields persisted
#[tokio::test]
async fn stores_traffic_report() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_conditions_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let station = create_station(db).await?;

    let repo = TrafficReportRepository::new(db);
    let report = repo
        .create(station.id, "heavy", 7.2, 14.5, 22, "live", Utc::now())
        .await?;

    assert_eq!(report.station_id, station.id);
    assert_eq!(report.severity, "heavy");
    assert_eq!(report.source, "live");

    Ok(())
}

/// Tests the lookback window.
///
/// Expected: only reports inside the window, newest first
#[tokio::test]
async fn window_excludes_old_reports() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_conditions_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let station = create_station(db).await?;
    let now = Utc::now();

    let repo = TrafficReportRepository::new(db);
    repo.create(station.id, "light", 1.0, 45.0, 3, "live", now - Duration::days(2))
        .await?;
    repo.create(station.id, "moderate", 4.0, 30.0, 12, "live", now - Duration::hours(2))
        .await?;
    repo.create(station.id, "heavy", 7.0, 18.0, 21, "live", now - Duration::hours(1))
        .await?;

    let reports = repo.get_since(station.id, now - Duration::hours(24)).await?;

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].severity, "heavy");
    assert_eq!(reports[1].severity, "moderate");

    Ok(())
}

/// Tests that reports are scoped per station.
///
/// Expected: another station's reports do not leak into the result
#[tokio::test]
async fn window_is_station_scoped() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_conditions_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let station_a = create_station(db).await?;
    let station_b = create_station(db).await?;
    let now = Utc::now();

    let repo = TrafficReportRepository::new(db);
    repo.create(station_a.id, "light", 1.0, 45.0, 3, "live", now)
        .await?;
    repo.create(station_b.id, "severe", 9.5, 4.0, 29, "live", now)
        .await?;

    let reports = repo.get_since(station_a.id, now - Duration::hours(1)).await?;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].station_id, station_a.id);

    Ok(())
}
