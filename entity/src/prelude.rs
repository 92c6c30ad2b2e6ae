pub use super::team::Entity as Team;
pub use super::user::Entity as User;
