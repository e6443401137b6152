use super::*;

/// Tests alphabetical ordering and total count.
///
/// Expected: users sorted by name, total equals row count
#[tokio::test]
async fn orders_users_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).name("Charlie").build().await?;
    UserFactory::new(db).name("Alice").build().await?;
    UserFactory::new(db).name("Bob").build().await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_all_paginated(0, 10).await?;

    assert_eq!(total, 3);
    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    Ok(())
}

/// Tests page slicing.
///
/// Expected: second page carries the remaining user
#[tokio::test]
async fn paginates_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).name("Alice").build().await?;
    UserFactory::new(db).name("Bob").build().await?;
    UserFactory::new(db).name("Charlie").build().await?;

    let repo = UserRepository::new(db);
    let (page_one, total) = repo.get_all_paginated(0, 2).await?;
    let (page_two, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(page_one.len(), 2);
    assert_eq!(page_two.len(), 1);
    assert_eq!(page_two[0].name, "Charlie");

    Ok(())
}
