//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user
//! sessions, organized by concern. Each struct handles a specific domain of session
//! data, preventing typos, ensuring type consistency, and centralizing session-related
//! logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - User authentication state (user id)
//! - `FlashSession` - One-shot notices surviving a redirect
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use tower_sessions::Session;

use crate::error::AppError;

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
const SESSION_FLASH_NOTICE: &str = "flash:notice";

/// Authentication session management.
///
/// Handles user authentication state: storing and retrieving the logged-in
/// user's id and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after a successful login to establish an authenticated session.
    /// No credential beyond an email match is checked anywhere before this.
    ///
    /// # Arguments
    /// - `user_id` - The user's database id
    ///
    /// # Returns
    /// - `Ok(())` - User id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Checks if a user is currently logged in.
    ///
    /// # Returns
    /// - `Ok(true)` - User is logged in
    /// - `Ok(false)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove the authentication binding along with any
    /// pending flash notice.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// Flash notice session management.
///
/// Carries a single user-visible notice across the redirect that follows a
/// successful mutation. Notices are read-once: taking a notice removes it so
/// it is shown exactly one time.
pub struct FlashSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    /// Creates a new FlashSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a notice to display on the next rendered page.
    ///
    /// # Arguments
    /// - `notice` - The user-visible message
    ///
    /// # Returns
    /// - `Ok(())` - Notice successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_notice(&self, notice: impl Into<String>) -> Result<(), AppError> {
        self.session
            .insert(SESSION_FLASH_NOTICE, notice.into())
            .await?;
        Ok(())
    }

    /// Retrieves and removes the pending notice, if any.
    ///
    /// The notice is removed so it is displayed exactly once.
    ///
    /// # Returns
    /// - `Ok(Some(notice))` - A notice was pending and has been consumed
    /// - `Ok(None)` - No notice pending
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_notice(&self) -> Result<Option<String>, AppError> {
        let notice = self.session.remove(SESSION_FLASH_NOTICE).await?;
        Ok(notice)
    }
}
