//! Team service for roster management.

use sea_orm::DatabaseConnection;

use crate::{
    data::team::TeamRepository,
    error::AppError,
    model::{
        form::{FieldError, TeamForm},
        team::{CreateTeamParams, Team, UpdateTeamParams},
    },
};

/// Result of a create or update attempt.
pub enum TeamOutcome {
    /// The record was written.
    Saved(Team),
    /// Validation failed; nothing was written.
    Invalid(Vec<FieldError>),
}

/// Result of a delete attempt on an existing team.
///
/// A storage failure during deletion is converted here rather than
/// propagated, so the caller can show a generic notice over an unchanged
/// list instead of failing the request.
pub enum DeleteOutcome {
    /// The row is gone.
    Deleted,
    /// The storage layer refused; the row remains.
    Failed,
}

/// Service providing business logic for team management.
pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all teams.
    pub async fn list(&self) -> Result<Vec<Team>, AppError> {
        let repo = TeamRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets one team by id.
    ///
    /// # Returns
    /// - `Ok(Team)` - The team
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn get(&self, id: i32) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team with id {} not found", id)))
    }

    /// Creates a team from a submitted form.
    pub async fn create(&self, form: TeamForm) -> Result<TeamOutcome, AppError> {
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(errors) => return Ok(TeamOutcome::Invalid(errors)),
        };

        let repo = TeamRepository::new(self.db);
        let team = repo.create(CreateTeamParams::from(valid)).await?;

        Ok(TeamOutcome::Saved(team))
    }

    /// Overwrites an existing team's fields from a submitted form.
    ///
    /// # Returns
    /// - `Ok(TeamOutcome::Saved)` - Fields replaced, id unchanged
    /// - `Ok(TeamOutcome::Invalid)` - Validation failed, record untouched
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn update(&self, id: i32, form: TeamForm) -> Result<TeamOutcome, AppError> {
        // Resolve existence first so a bad id is a 404 even when the
        // submission is also invalid.
        let current = self.get(id).await?;

        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(errors) => return Ok(TeamOutcome::Invalid(errors)),
        };

        let repo = TeamRepository::new(self.db);
        let team = repo
            .update(UpdateTeamParams::from_valid(current.id, valid))
            .await?;

        Ok(TeamOutcome::Saved(team))
    }

    /// Deletes an existing team by id.
    ///
    /// # Returns
    /// - `Ok(DeleteOutcome::Deleted)` - The row was removed
    /// - `Ok(DeleteOutcome::Failed)` - Storage refused the delete; row remains
    /// - `Err(AppError::NotFound)` - No team with that id
    pub async fn delete(&self, id: i32) -> Result<DeleteOutcome, AppError> {
        let team = self.get(id).await?;

        let repo = TeamRepository::new(self.db);
        match repo.delete(team.id).await {
            Ok(()) => Ok(DeleteOutcome::Deleted),
            Err(err) => {
                tracing::warn!("Failed to delete team {}: {}", team.id, err);
                Ok(DeleteOutcome::Failed)
            }
        }
    }
}
