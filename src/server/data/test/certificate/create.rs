use super::*;

/// Tests certificate creation and serial lookup.
///
/// Expected: Ok with serial stored and findable
#[tokio::test]
async fn creates_and_finds_by_serial() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let observer = create_observer(db).await?;
    let now = Utc::now();

    let repo = CertificateRepository::new(db);
    let certificate = repo
        .create(
            "CAFFE-2026-AB12CD34".to_string(),
            observer.id,
            None,
            now,
            now + Duration::days(730),
        )
        .await?;

    assert!(!certificate.revoked);

    let found = repo.find_by_serial("CAFFE-2026-AB12CD34").await?;
    assert_eq!(found.map(|c| c.id), Some(certificate.id));

    assert!(repo.find_by_serial("CAFFE-2026-ZZZZZZZZ").await?.is_none());

    Ok(())
}

/// Tests the unique serial constraint.
///
/// Expected: Err on duplicate serial
#[tokio::test]
async fn rejects_duplicate_serial() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let observer = create_observer(db).await?;
    let now = Utc::now();

    let repo = CertificateRepository::new(db);
    repo.create(
        "CAFFE-2026-SAME0001".to_string(),
        observer.id,
        None,
        now,
        now + Duration::days(730),
    )
    .await?;

    let duplicate = repo
        .create(
            "CAFFE-2026-SAME0001".to_string(),
            observer.id,
            None,
            now,
            now + Duration::days(730),
        )
        .await;

    assert!(duplicate.is_err());

    Ok(())
}

/// Tests listing an observer's certificates newest-first.
///
/// Expected: both certificates returned, most recent issue first
#[tokio::test]
async fn lists_certificates_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let observer = create_observer(db).await?;
    let now = Utc::now();

    let repo = CertificateRepository::new(db);
    repo.create(
        "CAFFE-2025-OLD00001".to_string(),
        observer.id,
        None,
        now - Duration::days(365),
        now + Duration::days(365),
    )
    .await?;
    repo.create(
        "CAFFE-2026-NEW00001".to_string(),
        observer.id,
        None,
        now,
        now + Duration::days(730),
    )
    .await?;

    let certificates = repo.get_by_observer(observer.id).await?;

    assert_eq!(certificates.len(), 2);
    assert_eq!(certificates[0].serial, "CAFFE-2026-NEW00001");

    Ok(())
}
