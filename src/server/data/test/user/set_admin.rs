use super::*;

/// Tests granting admin privileges.
///
/// Expected: admin column set after the update
#[tokio::test]
async fn grants_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    repo.set_admin(user.id, true).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert!(updated.admin);

    Ok(())
}

/// Tests revoking admin privileges.
///
/// Expected: admin column cleared after the update
#[tokio::test]
async fn revokes_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).admin(true).build().await?;

    let repo = UserRepository::new(db);
    repo.set_admin(user.id, false).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert!(!updated.admin);

    Ok(())
}

/// Tests stamping the last login time.
///
/// Expected: last_login_at set after the update
#[tokio::test]
async fn stamps_last_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;
    assert!(user.last_login_at.is_none());

    let repo = UserRepository::new(db);
    repo.update_last_login(user.id).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert!(updated.last_login_at.is_some());

    Ok(())
}
