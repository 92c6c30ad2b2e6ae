//! Team data repository for database operations.
//!
//! This module provides the `TeamRepository` for managing team roster records. It
//! handles creation, queries, in-place updates, and deletion with conversion between
//! entity models and domain models at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
};

use crate::model::team::{CreateTeamParams, Team, UpdateTeamParams};

/// Repository providing database operations for team management.
pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    /// Creates a new TeamRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new team.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing name, bio, and certification
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTeamParams) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            name: ActiveValue::Set(param.name),
            bio: ActiveValue::Set(param.bio),
            certification: ActiveValue::Set(param.certification),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    /// Gets all teams in storage order.
    ///
    /// No pagination and no ordering guarantee beyond what the storage
    /// returns naturally.
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - All team records
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find().all(self.db).await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Gets a team by id.
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - Team found
    /// - `Ok(None)` - No team with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Overwrites a team's mutable fields in place.
    ///
    /// The identifier never changes. Returns the updated snapshot.
    ///
    /// # Arguments
    /// - `param` - Update parameters containing id and the new field values
    ///
    /// # Returns
    /// - `Ok(Team)` - The updated team
    /// - `Err(DbErr::RecordNotFound)` - No team exists with the specified id
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, param: UpdateTeamParams) -> Result<Team, DbErr> {
        let team = entity::prelude::Team::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Team with id {} not found",
                param.id
            )))?;

        let mut active_model: entity::team::ActiveModel = team.into();
        active_model.name = ActiveValue::Set(param.name);
        active_model.bio = ActiveValue::Set(param.bio);
        active_model.certification = ActiveValue::Set(param.certification);

        let entity = active_model.update(self.db).await?;

        Ok(Team::from_entity(entity))
    }

    /// Deletes a team by id.
    ///
    /// # Returns
    /// - `Ok(())` - Team deleted (or didn't exist)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}
