//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let team = factory::team::create_team(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let team = factory::team::TeamFactory::new(&db)
//!     .name("Falcons")
//!     .bio("Founded 1998")
//!     .certification("Level II")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create registered user entities
//! - `team` - Create team roster entities
//! - `helpers` - Shared utilities (unique ID generation)

pub mod helpers;
pub mod team;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use team::create_team;
pub use user::{create_user, create_user_with_email};
