use super::*;
use crate::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};
use entity::prelude::User;
use sea_orm::{EntityTrait, Schema};
use test_utils::factory;

async fn context_with_user_table() -> TestContext {
    let mut test = TestContext::new();
    let schema = Schema::new(sea_orm::DbBackend::Sqlite);
    test.with_tables(vec![schema.create_table_from_entity(User)])
        .await
        .unwrap();
    test
}

#[tokio::test]
async fn rejects_session_without_user() {
    let mut test = context_with_user_table().await;
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

#[tokio::test]
async fn resolves_session_user_from_database() {
    let mut test = context_with_user_table().await;
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await.unwrap();
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let resolved = AuthGuard::new(db, session).require(&[]).await.unwrap();

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.name, user.name);
    assert_eq!(resolved.email, user.email);
}

#[tokio::test]
async fn rejects_session_referencing_missing_user() {
    let mut test = context_with_user_table().await;
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(9999).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9999)))
    ));
}

#[tokio::test]
async fn any_signed_in_user_may_manage_teams() {
    let mut test = context_with_user_table().await;
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await.unwrap();
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let resolved = AuthGuard::new(db, session)
        .require(&[Permission::ManageTeams])
        .await
        .unwrap();

    assert_eq!(resolved.id, user.id);
}
