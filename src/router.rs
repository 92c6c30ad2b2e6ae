use axum::{routing::get, Router};

use crate::{
    controller::{auth, page, team},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(page::welcome))
        .route("/registration", get(auth::registration_form).post(auth::register))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/welcome", get(page::welcome).post(page::welcome))
        .route("/home", get(auth::home).post(auth::home))
        .route("/userLogin", get(page::user_login).post(page::user_login))
        .route("/teams", get(team::list_teams).post(team::list_teams))
        .route("/addTeams", get(team::add_team_form).post(team::add_team))
        .route("/teams/delete/{id}", get(team::delete_team))
        .route("/teams/edit/{id}", get(team::edit_team_form).post(team::edit_team))
        .route("/team/{id}", get(team::team_detail))
}
