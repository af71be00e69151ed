pub use super::tour::Entity as Tour;
pub use super::user::Entity as User;
