//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod tour;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{ColumnTrait, Condition};

/// The standing visibility filter: secret tours never leave the data layer
/// through public reads, deletes included.
pub fn visible() -> Condition {
    Condition::all().add(entity::tour::Column::SecretTour.eq(false))
}
