//! SeaORM entity models for the team roster database.

pub mod prelude;

pub mod team;
pub mod user;
