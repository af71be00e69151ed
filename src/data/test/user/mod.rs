use crate::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use entity::user::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod get_all;
mod update;

/// Minimal valid creation parameters for tests that just need a user.
fn create_params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Test User".to_string(),
        email: email.to_string(),
        password_digest: "0".repeat(64),
        photo: None,
        role: Role::User,
    }
}
