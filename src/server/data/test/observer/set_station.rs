use super::*;

/// Tests assigning and clearing a station.
///
/// Expected: station_id set, then cleared
#[tokio::test]
async fn assigns_and_clears_station() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let station = create_station(db).await?;
    let observer = ObserverFactory::new(db).build().await?;

    let repo = ObserverRepository::new(db);
    repo.set_station(observer.id, Some(station.id)).await?;
    assert_eq!(
        repo.find_by_id(observer.id).await?.unwrap().station_id,
        Some(station.id)
    );

    repo.set_station(observer.id, None).await?;
    assert!(repo.find_by_id(observer.id).await?.unwrap().station_id.is_none());

    Ok(())
}

/// Tests the bulk unassign used before station deletion.
///
/// Expected: every observer posted to the station loses the assignment,
/// others keep theirs
#[tokio::test]
async fn unassigns_all_from_station() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let station_a = create_station(db).await?;
    let station_b = create_station(db).await?;

    let first = ObserverFactory::new(db).station_id(station_a.id).build().await?;
    let second = ObserverFactory::new(db).station_id(station_a.id).build().await?;
    let other = ObserverFactory::new(db).station_id(station_b.id).build().await?;

    let repo = ObserverRepository::new(db);
    repo.unassign_all_from_station(station_a.id).await?;

    assert!(repo.find_by_id(first.id).await?.unwrap().station_id.is_none());
    assert!(repo.find_by_id(second.id).await?.unwrap().station_id.is_none());
    assert_eq!(
        repo.find_by_id(other.id).await?.unwrap().station_id,
        Some(station_b.id)
    );

    Ok(())
}
