//! View DTOs returned by the page controllers.
//!
//! Each DTO is the full set of values a view needs: the form state to
//! redisplay, any field errors to show inline, and the flash notice carried
//! over from the previous request. Rendering to HTML is the presentation
//! layer's job.

use serde::Serialize;

use crate::model::{form::FieldError, team::TeamDto};

/// Static page with nothing but an optional flash notice.
#[derive(Serialize, Debug)]
pub struct PageDto {
    pub notice: Option<String>,
}

/// Landing page. Name and email are present only when rendered for an
/// authenticated user on the home route.
#[derive(Serialize, Debug)]
pub struct WelcomePageDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub notice: Option<String>,
}

/// Registration form page, redisplayed with submitted values and errors on
/// a failed submit.
#[derive(Serialize, Debug)]
pub struct RegistrationPageDto {
    pub name: String,
    pub email: String,
    pub errors: Vec<FieldError>,
    pub notice: Option<String>,
}

/// Login form page.
#[derive(Serialize, Debug)]
pub struct LoginPageDto {
    pub email: String,
    pub errors: Vec<FieldError>,
    pub notice: Option<String>,
}

/// Team add/edit form page. Pre-populated with the current record's values
/// in the edit flow.
#[derive(Serialize, Debug)]
pub struct TeamFormPageDto {
    pub name: String,
    pub bio: String,
    pub certification: String,
    pub errors: Vec<FieldError>,
    pub notice: Option<String>,
}

/// Team roster listing.
#[derive(Serialize, Debug)]
pub struct TeamListPageDto {
    pub teams: Vec<TeamDto>,
    pub notice: Option<String>,
}
