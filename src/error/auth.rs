use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::MessageDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was supplied on a protected route.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authentication token was provided")]
    MissingToken,

    /// The bearer token could not be parsed.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("The provided authentication token is invalid")]
    InvalidToken,

    /// The token referenced a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("The user belonging to this token does no longer exist")]
    UserNotFound,

    /// Email or password did not match during login.
    ///
    /// Results in a 401 Unauthorized response. The message deliberately does
    /// not say which of the two was wrong.
    #[error("Incorrect email or password")]
    IncorrectCredentials,

    /// The authenticated user's role is not allowed on this route.
    ///
    /// Results in a 403 Forbidden response.
    #[error("You do not have permission to perform this action")]
    AccessDenied,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes:
/// - `MissingToken` / `InvalidToken` / `UserNotFound` / `IncorrectCredentials` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// The error's `Display` message doubles as the client-facing message; none of
/// the variants leak anything beyond what a client needs to correct.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::AccessDenied => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        };

        (status, Json(MessageDto::fail(self.to_string()))).into_response()
    }
}
