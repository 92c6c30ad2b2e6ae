//! Team domain model, parameters, and view DTO.

use serde::Serialize;

use crate::model::form::ValidTeam;

/// Team roster record.
///
/// The identifier is immutable once assigned; all other fields are mutable
/// in place through the edit flow. Name carries no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub bio: String,
    pub certification: String,
}

impl Team {
    /// Converts an entity model to a team domain model at the repository boundary.
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            bio: entity.bio,
            certification: entity.certification,
        }
    }

    /// Converts the team domain model to a DTO for view rendering.
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            bio: self.bio,
            certification: self.certification,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub bio: String,
    pub certification: String,
}

/// Parameters for inserting a new team.
#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub name: String,
    pub bio: String,
    pub certification: String,
}

impl From<ValidTeam> for CreateTeamParams {
    fn from(valid: ValidTeam) -> Self {
        Self {
            name: valid.name,
            bio: valid.bio,
            certification: valid.certification,
        }
    }
}

/// Parameters for overwriting an existing team's mutable fields.
#[derive(Debug, Clone)]
pub struct UpdateTeamParams {
    pub id: i32,
    pub name: String,
    pub bio: String,
    pub certification: String,
}

impl UpdateTeamParams {
    pub fn from_valid(id: i32, valid: ValidTeam) -> Self {
        Self {
            id,
            name: valid.name,
            bio: valid.bio,
            certification: valid.certification,
        }
    }
}
