use super::*;

/// Tests creating a new console user.
///
/// Expected: Ok with the stored name, email, and admin flag
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "Ann-Marie".to_string(),
            "ann.marie@caffe.org.jm".to_string(),
            false,
        )
        .await?;

    assert_eq!(user.name, "Ann-Marie");
    assert_eq!(user.email, "ann.marie@caffe.org.jm");
    assert!(!user.admin);
    assert!(user.last_login_at.is_none());

    Ok(())
}

/// Tests that the unique email constraint rejects duplicates.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create("First".to_string(), "dup@caffe.org.jm".to_string(), false)
        .await?;

    let result = repo
        .create("Second".to_string(), "dup@caffe.org.jm".to_string(), false)
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests looking a user up by email.
///
/// Expected: Ok(Some) for a stored email, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create("Finder".to_string(), "finder@caffe.org.jm".to_string(), true)
        .await?;

    let found = repo.find_by_email("finder@caffe.org.jm").await?;
    assert_eq!(found.map(|u| u.id), Some(created.id));

    let missing = repo.find_by_email("nobody@caffe.org.jm").await?;
    assert!(missing.is_none());

    Ok(())
}
