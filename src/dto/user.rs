//! Wire representations of users.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use entity::user::Role;

/// A user document as serialized to clients; never carries the password
/// digest.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[schema(value_type = String)]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, ToSchema)]
pub struct UserData {
    pub user: UserDto,
}

#[derive(Serialize, ToSchema)]
pub struct UsersData {
    pub users: Vec<UserDto>,
}
