use super::*;

/// Tests looking up an existing user by their email address.
///
/// Expected: Ok(Some) with the matching user.
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user_with_email(db, "ada@example.com").await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("ada@example.com").await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.email, "ada@example.com");

    Ok(())
}

/// Tests looking up an unclaimed email address.
///
/// Expected: Ok(None).
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
