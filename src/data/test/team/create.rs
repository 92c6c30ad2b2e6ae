use super::*;

/// Tests creating a team with all three fields.
///
/// Expected: Ok with id assigned and fields stored verbatim.
#[tokio::test]
async fn creates_team_with_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            name: "Falcons".to_string(),
            bio: "desc".to_string(),
            certification: "cert".to_string(),
        })
        .await?;

    assert!(team.id > 0);
    assert_eq!(team.name, "Falcons");
    assert_eq!(team.bio, "desc");
    assert_eq!(team.certification, "cert");

    Ok(())
}

/// Tests that team names carry no uniqueness constraint.
///
/// Expected: two teams with the same name, distinct ids.
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let params = CreateTeamParams {
        name: "Falcons".to_string(),
        bio: String::new(),
        certification: String::new(),
    };

    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, second.name);

    Ok(())
}
