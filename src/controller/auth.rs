use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, FlashSession},
    },
    model::{
        form::{LoginForm, RegistrationForm},
        page::{LoginPageDto, RegistrationPageDto, WelcomePageDto},
    },
    service::user::{LoginOutcome, RegistrationOutcome, UserService},
    state::AppState,
};

/// Shows the empty registration form.
pub async fn registration_form(session: Session) -> Result<impl IntoResponse, AppError> {
    let notice = FlashSession::new(&session).take_notice().await?;

    Ok(Json(RegistrationPageDto {
        name: String::new(),
        email: String::new(),
        errors: Vec::new(),
        notice,
    }))
}

/// Handles a registration submission.
///
/// On success the new user is told to log in with their email; on a failed
/// validation the form is redisplayed with the submitted values and errors.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, AppError> {
    let service = UserService::new(&state.db);

    match service.register(form.clone()).await? {
        RegistrationOutcome::Registered(_) => {
            FlashSession::new(&session)
                .set_notice("User added successfully, log in using your email")
                .await?;

            Ok(Redirect::to("/login").into_response())
        }
        RegistrationOutcome::Invalid(errors) => Ok(Json(RegistrationPageDto {
            name: form.name,
            email: form.email,
            errors,
            notice: None,
        })
        .into_response()),
    }
}

/// Shows the empty login form.
pub async fn login_form(session: Session) -> Result<impl IntoResponse, AppError> {
    let notice = FlashSession::new(&session).take_notice().await?;

    Ok(Json(LoginPageDto {
        email: String::new(),
        errors: Vec::new(),
        notice,
    }))
}

/// Handles a login submission.
///
/// A registered email is the entire credential. A match binds the session
/// to that user and redirects home; anything else redisplays the form.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let service = UserService::new(&state.db);

    match service.login(form.clone()).await? {
        LoginOutcome::LoggedIn(user) => {
            AuthSession::new(&session).set_user_id(user.id).await?;

            Ok(Redirect::to("/home").into_response())
        }
        LoginOutcome::Unknown => Ok(Json(LoginPageDto {
            email: form.email,
            errors: Vec::new(),
            notice: Some("Login unsuccessful, please check email".to_string()),
        })
        .into_response()),
        LoginOutcome::Invalid(errors) => Ok(Json(LoginPageDto {
            email: form.email,
            errors,
            notice: None,
        })
        .into_response()),
    }
}

/// Logs the user out and returns to the login page.
pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::to("/login")
}

/// Authenticated home page.
///
/// Resolves the session identity against the database; unauthenticated
/// visitors are sent to the public welcome page instead.
pub async fn home(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    match AuthGuard::new(&state.db, &session).require(&[]).await {
        Ok(user) => {
            let notice = FlashSession::new(&session).take_notice().await?;

            Ok(Json(WelcomePageDto {
                name: Some(user.name),
                email: Some(user.email),
                notice,
            })
            .into_response())
        }
        Err(AppError::AuthErr(_)) => Ok(Redirect::to("/welcome").into_response()),
        Err(err) => Err(err),
    }
}
