//! Domain model for users. The password digest never leaves the data
//! layer except through [`entity::user::Model`] during login.

use sea_orm::prelude::DateTimeUtc;

use entity::user::Role;

use crate::dto::user::UserDto;

/// A user as the service layer sees it; the stored password digest is
/// deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub photo: Option<String>,
    pub role: Role,
    pub created_at: DateTimeUtc,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            photo: entity.photo,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            photo: self.photo,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Validated parameters for inserting a user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_digest: String,
    pub photo: Option<String>,
    pub role: Role,
}

/// Validated parameters for updating a user row; `None` means leave
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub role: Option<Role>,
}
