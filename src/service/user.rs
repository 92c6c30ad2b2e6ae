//! User service for registration and login.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::{
        form::{email_taken_error, FieldError, LoginForm, RegistrationForm},
        user::{CreateUserParams, User},
    },
};

/// Result of a registration attempt.
pub enum RegistrationOutcome {
    /// The user was created; exactly one new row exists.
    Registered(User),
    /// Validation failed; nothing was written.
    Invalid(Vec<FieldError>),
}

/// Result of a login attempt.
pub enum LoginOutcome {
    /// The email matched a registered user.
    LoggedIn(User),
    /// Well-formed email, but no user has it.
    Unknown,
    /// The submitted email failed validation.
    Invalid(Vec<FieldError>),
}

/// Service providing registration and login logic.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user from a submitted form.
    ///
    /// Validates the fields, then checks whether the email is already
    /// claimed. That read-then-decide check is a courtesy for the common
    /// case; it is not atomic with the insert, so the unique constraint is
    /// the authoritative guard and its rejection is translated into the same
    /// field error rather than a crash.
    pub async fn register(&self, form: RegistrationForm) -> Result<RegistrationOutcome, AppError> {
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(errors) => return Ok(RegistrationOutcome::Invalid(errors)),
        };

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&valid.email).await?.is_some() {
            return Ok(RegistrationOutcome::Invalid(vec![email_taken_error()]));
        }

        match repo.create(CreateUserParams::from(valid)).await {
            Ok(user) => Ok(RegistrationOutcome::Registered(user)),
            Err(err) => match err.sql_err() {
                // Lost the race against a concurrent registration.
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Ok(RegistrationOutcome::Invalid(vec![email_taken_error()]))
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Resolves a login form to a registered user.
    ///
    /// Submitting a registered email is the entire credential; there is no
    /// password or token in this system. Session establishment is the
    /// controller's job.
    pub async fn login(&self, form: LoginForm) -> Result<LoginOutcome, AppError> {
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(errors) => return Ok(LoginOutcome::Invalid(errors)),
        };

        let repo = UserRepository::new(self.db);

        match repo.find_by_email(&valid.email).await? {
            Some(user) => Ok(LoginOutcome::LoggedIn(user)),
            None => Ok(LoginOutcome::Unknown),
        }
    }
}
