use super::*;

/// Tests deleting an existing team.
///
/// Expected: exactly that row removed; others remain.
#[tokio::test]
async fn removes_only_the_target_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_team(db).await?;
    let survivor = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    repo.delete(target.id).await?;

    assert!(repo.get_by_id(target.id).await?.is_none());
    assert!(repo.get_by_id(survivor.id).await?.is_some());

    let count = entity::prelude::Team::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests deleting an id that does not exist.
///
/// Expected: Ok, table unchanged. Existence checks live in the service layer.
#[tokio::test]
async fn is_a_noop_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    repo.delete(424242).await?;

    let count = entity::prelude::Team::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
