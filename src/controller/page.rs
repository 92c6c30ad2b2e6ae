use axum::{response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::session::FlashSession,
    model::page::{PageDto, WelcomePageDto},
};

/// Landing page, served on `/` and `/welcome`.
pub async fn welcome(session: Session) -> Result<impl IntoResponse, AppError> {
    let notice = FlashSession::new(&session).take_notice().await?;

    Ok(Json(WelcomePageDto {
        name: None,
        email: None,
        notice,
    }))
}

/// Static informational page on `/userLogin`.
pub async fn user_login(session: Session) -> Result<impl IntoResponse, AppError> {
    let notice = FlashSession::new(&session).take_notice().await?;

    Ok(Json(PageDto { notice }))
}
