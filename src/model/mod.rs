pub mod tour;
pub mod user;
