//! SeaORM entity models for the tourboard database schema.

pub mod prelude;

pub mod tour;
pub mod user;
