pub mod api;
pub mod tour;
pub mod user;
