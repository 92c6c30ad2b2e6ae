use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{
        auth::{AuthGuard, Permission},
        session::FlashSession,
    },
    model::{
        form::TeamForm,
        page::{TeamFormPageDto, TeamListPageDto},
    },
    service::team::{DeleteOutcome, TeamOutcome, TeamService},
    state::AppState,
};

/// Permissions that will guard team mutations once access control is turned on.
const TEAM_MUTATION_PERMISSIONS: &[Permission] = &[Permission::ManageTeams];

/// Whether team mutations require a signed-in user.
///
/// Add, edit, and delete have always been open to anonymous visitors; flip
/// this on to route every mutation through `AuthGuard::require` without
/// touching the handlers.
const ENFORCE_TEAM_AUTHORIZATION: bool = false;

/// Authorization hook for the team mutation handlers.
async fn authorize_team_mutation(guard: &AuthGuard<'_>) -> Result<(), AppError> {
    if ENFORCE_TEAM_AUTHORIZATION {
        guard.require(TEAM_MUTATION_PERMISSIONS).await?;
    }

    Ok(())
}

/// Lists every team in the roster.
pub async fn list_teams(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db).list().await?;
    let notice = FlashSession::new(&session).take_notice().await?;

    Ok(Json(TeamListPageDto {
        teams: teams.into_iter().map(|team| team.into_dto()).collect(),
        notice,
    }))
}

/// Shows the empty add-team form.
pub async fn add_team_form(session: Session) -> Result<impl IntoResponse, AppError> {
    let notice = FlashSession::new(&session).take_notice().await?;

    Ok(Json(TeamFormPageDto {
        name: String::new(),
        bio: String::new(),
        certification: String::new(),
        errors: Vec::new(),
        notice,
    }))
}

/// Handles an add-team submission.
pub async fn add_team(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<TeamForm>,
) -> Result<Response, AppError> {
    authorize_team_mutation(&AuthGuard::new(&state.db, &session)).await?;

    let service = TeamService::new(&state.db);

    match service.create(form.clone()).await? {
        TeamOutcome::Saved(_) => {
            FlashSession::new(&session)
                .set_notice("Team data added Successfully!")
                .await?;

            Ok(Redirect::to("/teams").into_response())
        }
        TeamOutcome::Invalid(errors) => Ok(Json(TeamFormPageDto {
            name: form.name,
            bio: form.bio,
            certification: form.certification,
            errors,
            notice: None,
        })
        .into_response()),
    }
}

/// Shows one team's detail page.
pub async fn team_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get(id).await?;

    Ok(Json(team.into_dto()))
}

/// Shows the edit form pre-populated with the team's current values.
pub async fn edit_team_form(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db).get(id).await?;
    let notice = FlashSession::new(&session).take_notice().await?;

    Ok(Json(TeamFormPageDto {
        name: team.name,
        bio: team.bio,
        certification: team.certification,
        errors: Vec::new(),
        notice,
    }))
}

/// Handles an edit-team submission.
///
/// A failed validation redisplays the form pre-populated from the stored
/// record, with the errors attached; the submitted values are discarded.
pub async fn edit_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<TeamForm>,
) -> Result<Response, AppError> {
    authorize_team_mutation(&AuthGuard::new(&state.db, &session)).await?;

    let service = TeamService::new(&state.db);

    match service.update(id, form).await? {
        TeamOutcome::Saved(team) => {
            FlashSession::new(&session)
                .set_notice("Team Has Been Updated!")
                .await?;

            Ok(Redirect::to(&format!("/team/{}", team.id)).into_response())
        }
        TeamOutcome::Invalid(errors) => {
            let team = service.get(id).await?;

            Ok(Json(TeamFormPageDto {
                name: team.name,
                bio: team.bio,
                certification: team.certification,
                errors,
                notice: None,
            })
            .into_response())
        }
    }
}

/// Deletes a team and re-renders the list.
///
/// A storage failure during the delete leaves the table unchanged and shows
/// a generic notice over the still-complete list; it never fails the request.
pub async fn delete_team(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    authorize_team_mutation(&AuthGuard::new(&state.db, &session)).await?;

    let service = TeamService::new(&state.db);

    let notice = match service.delete(id).await? {
        DeleteOutcome::Deleted => "Team Was Deleted!",
        DeleteOutcome::Failed => "Whoops! There was a problem deleting the team, try again...",
    };

    let teams = service.list().await?;

    Ok(Json(TeamListPageDto {
        teams: teams.into_iter().map(|team| team.into_dto()).collect(),
        notice: Some(notice.to_string()),
    }))
}
