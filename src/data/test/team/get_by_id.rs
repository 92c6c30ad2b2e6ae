use super::*;

/// Tests fetching one team by its assigned id.
///
/// Expected: Ok(Some) with all fields intact.
#[tokio::test]
async fn finds_existing_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::team::TeamFactory::new(db)
        .name("Falcons")
        .bio("desc")
        .certification("cert")
        .build()
        .await?;

    let repo = TeamRepository::new(db);
    let found = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Falcons");
    assert_eq!(found.bio, "desc");
    assert_eq!(found.certification, "cert");

    Ok(())
}

/// Tests fetching an id that was never assigned.
///
/// Expected: Ok(None).
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let found = repo.get_by_id(424242).await?;

    assert!(found.is_none());

    Ok(())
}
