//! Request authentication and role checks.
//!
//! Authentication is deliberately a stub: the bearer token is the plain user
//! ID, standing in for a signed token while the full login flow is built out.
//! Everything around it (header parsing, user lookup, role enforcement) is
//! the real thing, so swapping in a proper token format later only touches
//! [`parse_bearer_id`].

use axum::http::{header, HeaderMap};
use sea_orm::DatabaseConnection;

use entity::user::Role;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Per-request guard over the authenticated user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the request's user and enforces a role allow-list.
    ///
    /// An empty allow-list means any authenticated user passes.
    ///
    /// # Arguments
    /// - `roles`: Roles permitted on this route
    ///
    /// # Returns
    /// - `Ok(User)`: The authenticated, authorized user
    /// - `Err(AppError)`: 401 for missing/invalid token or unknown user,
    ///   403 when the role is not allowed
    pub async fn require(&self, roles: &[Role]) -> Result<User, AppError> {
        let user = self.authenticate().await?;

        if !roles.is_empty() && !roles.contains(&user.role) {
            return Err(AuthError::AccessDenied.into());
        }

        Ok(user)
    }

    async fn authenticate(&self) -> Result<User, AppError> {
        let header = self
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let id = parse_bearer_id(header).ok_or(AuthError::InvalidToken)?;

        let user = UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(user)
    }
}

/// Extracts the user ID from a `Bearer <id>` header value.
fn parse_bearer_id(header: &str) -> Option<i32> {
    let token = header.strip_prefix("Bearer ")?.trim();
    match token.parse::<i32>() {
        Ok(id) if id > 0 => Some(id),
        _ => None,
    }
}
