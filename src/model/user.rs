//! User domain model and parameters.

use chrono::{DateTime, Utc};

use crate::model::form::ValidRegistration;

/// Registered user with email identity.
///
/// Users are created once at registration and never updated or deleted.
/// The email address is globally unique and doubles as the login credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// System-assigned identifier, stable for the user's lifetime.
    pub id: i32,
    /// Display name, 2-20 characters.
    pub name: String,
    /// Unique email address used to log in.
    pub email: String,
    /// When the user registered. Set once at creation.
    pub date_added: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            date_added: entity.date_added,
        }
    }
}

/// Parameters for inserting a new user at registration.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
}

impl From<ValidRegistration> for CreateUserParams {
    fn from(valid: ValidRegistration) -> Self {
        Self {
            name: valid.name,
            email: valid.email,
        }
    }
}
