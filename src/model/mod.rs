//! Domain models, form validation, and view DTOs.
//!
//! Domain models are immutable request-scoped snapshots converted from
//! database entities at the repository boundary. Forms are the raw submitted
//! shapes with pure validation producing either a validated record or
//! field-level errors. Page DTOs carry the data a view needs, plus any flash
//! notice, for the presentation layer to render.

pub mod api;
pub mod form;
pub mod page;
pub mod team;
pub mod user;
