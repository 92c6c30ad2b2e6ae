use super::*;

/// Tests listing when no teams exist.
///
/// Expected: Ok with an empty vector.
#[tokio::test]
async fn returns_empty_list_without_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let teams = repo.get_all().await?;

    assert!(teams.is_empty());

    Ok(())
}

/// Tests that the list matches the table contents as a set, and that
/// re-fetching is side-effect-free.
///
/// Expected: both fetches return the same ids as were created.
#[tokio::test]
async fn returns_all_teams_and_is_stable() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created_ids = vec![
        factory::create_team(db).await?.id,
        factory::create_team(db).await?.id,
        factory::create_team(db).await?.id,
    ];
    created_ids.sort_unstable();

    let repo = TeamRepository::new(db);

    let mut first: Vec<i32> = repo.get_all().await?.iter().map(|t| t.id).collect();
    first.sort_unstable();
    let mut second: Vec<i32> = repo.get_all().await?.iter().map(|t| t.id).collect();
    second.sort_unstable();

    assert_eq!(first, created_ids);
    assert_eq!(second, created_ids);

    Ok(())
}
