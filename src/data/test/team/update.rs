use super::*;

/// Tests overwriting a team's mutable fields in place.
///
/// Expected: fields replaced, identifier unchanged, refetch sees new values.
#[tokio::test]
async fn overwrites_fields_and_keeps_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    let updated = repo
        .update(UpdateTeamParams {
            id: created.id,
            name: "Renamed".to_string(),
            bio: "new bio".to_string(),
            certification: "new cert".to_string(),
        })
        .await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Renamed");

    let refetched = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(refetched.name, "Renamed");
    assert_eq!(refetched.bio, "new bio");
    assert_eq!(refetched.certification, "new cert");

    Ok(())
}

/// Tests that updating only touches the targeted row.
///
/// Expected: the other team's fields are untouched.
#[tokio::test]
async fn leaves_other_teams_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_team(db).await?;
    let other = factory::create_team(db).await?;

    let repo = TeamRepository::new(db);
    repo.update(UpdateTeamParams {
        id: target.id,
        name: "Renamed".to_string(),
        bio: String::new(),
        certification: String::new(),
    })
    .await?;

    let untouched = repo.get_by_id(other.id).await?.unwrap();
    assert_eq!(untouched.name, other.name);
    assert_eq!(untouched.bio, other.bio);

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound).
#[tokio::test]
async fn fails_for_unknown_id() {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let result = repo
        .update(UpdateTeamParams {
            id: 424242,
            name: "Ghost".to_string(),
            bio: String::new(),
            certification: String::new(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
}
