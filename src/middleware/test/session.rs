use super::*;
use crate::middleware::session::{AuthSession, FlashSession};

#[tokio::test]
async fn stores_and_retrieves_user_id() {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();
    let auth = AuthSession::new(session);

    assert_eq!(auth.get_user_id().await.unwrap(), None);
    assert!(!auth.is_authenticated().await.unwrap());

    auth.set_user_id(42).await.unwrap();

    assert_eq!(auth.get_user_id().await.unwrap(), Some(42));
    assert!(auth.is_authenticated().await.unwrap());
}

#[tokio::test]
async fn clear_always_removes_authentication() {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();
    let auth = AuthSession::new(session);

    // Clearing an unauthenticated session is a no-op.
    auth.clear().await;
    assert!(!auth.is_authenticated().await.unwrap());

    auth.set_user_id(7).await.unwrap();
    auth.clear().await;

    assert!(!auth.is_authenticated().await.unwrap());
    assert_eq!(auth.get_user_id().await.unwrap(), None);
}

#[tokio::test]
async fn flash_notice_is_consumed_on_take() {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();
    let flash = FlashSession::new(session);

    assert_eq!(flash.take_notice().await.unwrap(), None);

    flash.set_notice("Team data added Successfully!").await.unwrap();

    assert_eq!(
        flash.take_notice().await.unwrap().as_deref(),
        Some("Team data added Successfully!")
    );
    // Read-once: a second take comes back empty.
    assert_eq!(flash.take_notice().await.unwrap(), None);
}

#[tokio::test]
async fn clear_discards_pending_notice() {
    let mut test = TestContext::new();
    let session = test.session().await.unwrap();

    FlashSession::new(session).set_notice("pending").await.unwrap();
    AuthSession::new(session).clear().await;

    assert_eq!(FlashSession::new(session).take_notice().await.unwrap(), None);
}
