use super::*;

/// Tests creating a user from registration parameters.
///
/// Expected: Ok with id assigned, fields stored, and a creation timestamp set.
#[tokio::test]
async fn creates_user_with_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Ada");
    assert_eq!(user.email, "ada@example.com");

    // Timestamp is set at insert time.
    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.date_added, user.date_added);

    Ok(())
}

/// Tests that the email unique constraint rejects a second insert.
///
/// Expected: Err from the database, and exactly one row remains.
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_email(db, "taken@example.com").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            name: "Second".to_string(),
            email: "taken@example.com".to_string(),
        })
        .await;

    assert!(result.is_err());

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
