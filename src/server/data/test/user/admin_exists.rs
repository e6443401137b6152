use super::*;

/// Tests the admin check on an empty database.
///
/// Expected: Ok(false) when no users exist
#[tokio::test]
async fn no_admin_on_empty_database() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests that non-admin users do not satisfy the admin check.
///
/// Expected: Ok(false) with only regular users present
#[tokio::test]
async fn regular_users_are_not_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    assert!(!repo.admin_exists().await?);

    Ok(())
}

/// Tests that one admin user satisfies the check.
///
/// Expected: Ok(true) after inserting an admin
#[tokio::test]
async fn detects_existing_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).admin(true).build().await?;

    let repo = UserRepository::new(db);
    assert!(repo.admin_exists().await?);

    Ok(())
}
