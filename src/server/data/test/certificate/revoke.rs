use super::*;

/// Tests revoking a single certificate.
///
/// Expected: revoked flag set
#[tokio::test]
async fn revokes_certificate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let observer = create_observer(db).await?;
    let now = Utc::now();

    let repo = CertificateRepository::new(db);
    let certificate = repo
        .create(
            "CAFFE-2026-REVOKE01".to_string(),
            observer.id,
            None,
            now,
            now + Duration::days(730),
        )
        .await?;

    repo.set_revoked(certificate.id).await?;

    let updated = repo.find_by_id(certificate.id).await?.unwrap();
    assert!(updated.revoked);

    Ok(())
}

/// Tests the bulk revoke used when an observer is deleted.
///
/// Expected: all of the observer's certificates revoked, others untouched
#[tokio::test]
async fn revokes_all_for_observer() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_observer_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let observer = create_observer(db).await?;
    let other = create_observer(db).await?;
    let now = Utc::now();

    let repo = CertificateRepository::new(db);
    repo.create(
        "CAFFE-2026-BULK0001".to_string(),
        observer.id,
        None,
        now,
        now + Duration::days(730),
    )
    .await?;
    repo.create(
        "CAFFE-2026-BULK0002".to_string(),
        observer.id,
        None,
        now,
        now + Duration::days(730),
    )
    .await?;
    let keep = repo
        .create(
            "CAFFE-2026-KEEP0001".to_string(),
            other.id,
            None,
            now,
            now + Duration::days(730),
        )
        .await?;

    repo.revoke_all_for_observer(observer.id).await?;

    let revoked = repo.get_by_observer(observer.id).await?;
    assert!(revoked.iter().all(|c| c.revoked));

    let untouched = repo.find_by_id(keep.id).await?.unwrap();
    assert!(!untouched.revoked);

    Ok(())
}
