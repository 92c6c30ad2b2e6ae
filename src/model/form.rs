//! Submitted form shapes and pure validation.
//!
//! Each entity that can be submitted through an HTML form has an explicit
//! struct here, deserialized from the urlencoded body, with a `validate()`
//! method returning either a validated record or a list of field-level
//! errors. Validation never touches storage; the registration email
//! uniqueness check lives in the service layer where the repository is
//! available.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Loose address-shape check, not a full RFC 5322 parse. Good enough to
/// reject obviously malformed input before the database lookup.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const REQUIRED_MESSAGE: &str = "This field is required.";
const NAME_LENGTH_MESSAGE: &str = "Field must be between 2 and 20 characters long.";
const INVALID_EMAIL_MESSAGE: &str = "Invalid email address.";
const EMAIL_TAKEN_MESSAGE: &str = "That email is taken. Please choose a different one.";

/// A single validation failure, attributed to the offending field.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// The duplicate-email error surfaced on the registration form.
///
/// Produced by the service layer, both for the courtesy pre-check and when
/// the unique constraint rejects a racing insert.
pub fn email_taken_error() -> FieldError {
    FieldError::new("email", EMAIL_TAKEN_MESSAGE)
}

/// Raw registration form submission.
#[derive(Deserialize, Debug, Clone)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Registration data that passed syntactic validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub name: String,
    pub email: String,
}

impl RegistrationForm {
    /// Validates the submitted registration fields.
    ///
    /// Name is required with a trimmed length of 2 to 20 characters; email is
    /// required and must look like an address. Uniqueness is not checked here.
    pub fn validate(&self) -> Result<ValidRegistration, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", REQUIRED_MESSAGE));
        } else {
            let length = name.chars().count();
            if !(2..=20).contains(&length) {
                errors.push(FieldError::new("name", NAME_LENGTH_MESSAGE));
            }
        }

        if let Err(error) = validate_email_field(&self.email) {
            errors.push(error);
        }

        if errors.is_empty() {
            Ok(ValidRegistration {
                name: name.to_string(),
                email: self.email.trim().to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

/// Raw login form submission. Email only; there is no password field
/// anywhere in this system.
#[derive(Deserialize, Debug, Clone)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
}

/// Login data that passed syntactic validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLogin {
    pub email: String,
}

impl LoginForm {
    /// Validates the submitted login email: required plus address format.
    pub fn validate(&self) -> Result<ValidLogin, Vec<FieldError>> {
        match validate_email_field(&self.email) {
            Ok(()) => Ok(ValidLogin {
                email: self.email.trim().to_string(),
            }),
            Err(error) => Err(vec![error]),
        }
    }
}

/// Raw team form submission, shared by the add and edit flows.
#[derive(Deserialize, Debug, Clone)]
pub struct TeamForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub certification: String,
}

/// Team data that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTeam {
    pub name: String,
    pub bio: String,
    pub certification: String,
}

impl TeamForm {
    /// Validates the submitted team fields.
    ///
    /// Only the name is required; bio and certification are optional free
    /// text and pass through as submitted.
    pub fn validate(&self) -> Result<ValidTeam, Vec<FieldError>> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(vec![FieldError::new("name", REQUIRED_MESSAGE)]);
        }

        Ok(ValidTeam {
            name: name.to_string(),
            bio: self.bio.clone(),
            certification: self.certification.clone(),
        })
    }
}

fn validate_email_field(raw: &str) -> Result<(), FieldError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FieldError::new("email", REQUIRED_MESSAGE));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::new("email", INVALID_EMAIL_MESSAGE));
    }
    Ok(())
}
