use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Permissions a handler can demand beyond a plain authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Permission to create, edit, or delete roster teams.
    ///
    /// Currently granted to every signed-in user; team handlers do not yet
    /// demand it (mutations are open, see `controller::team`).
    ManageTeams,
}

/// Resolves the session's identity against the database and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires an authenticated user holding all of the given permissions.
    ///
    /// Re-fetches the user row referenced by the session, restoring identity
    /// across requests. An empty permission slice demands authentication only.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No user bound to session
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Session user no longer exists
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                // Any signed-in user may manage teams for now.
                Permission::ManageTeams => {}
            }
        }

        Ok(user)
    }
}
