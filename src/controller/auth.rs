use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::JsonBody,
    dto::{
        api::{DocumentDto, MessageDto, ValidationErrorsDto},
        user::UserData,
    },
    error::AppError,
    service::user::UserService,
    state::AppState,
    validation::{
        user::{parse_forgot_password_body, parse_login_body, parse_signup_body},
        ValidationFailure,
    },
};

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/api/v1/users/signup",
    tag = AUTH_TAG,
    request_body = Object,
    responses(
        (status = 201, description = "Successfully signed up", body = DocumentDto<UserData>),
        (status = 400, description = "Invalid signup data", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let params = parse_signup_body(body).map_err(ValidationFailure::in_body)?;

    let user = UserService::new(&state.db).signup(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(DocumentDto::new(UserData {
            user: user.into_dto(),
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/users/login",
    tag = AUTH_TAG,
    request_body = Object,
    responses(
        (status = 200, description = "Successfully logged in", body = DocumentDto<UserData>),
        (status = 400, description = "Invalid login data", body = ValidationErrorsDto),
        (status = 401, description = "Incorrect credentials", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let params = parse_login_body(body).map_err(ValidationFailure::in_body)?;

    let user = UserService::new(&state.db).login(params).await?;

    Ok((
        StatusCode::OK,
        Json(DocumentDto::new(UserData {
            user: user.into_dto(),
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/users/forgotPassword",
    tag = AUTH_TAG,
    request_body = Object,
    responses(
        (status = 200, description = "Reset token issued", body = MessageDto),
        (status = 400, description = "Invalid email", body = ValidationErrorsDto),
        (status = 404, description = "No user with that email", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let email = parse_forgot_password_body(body).map_err(ValidationFailure::in_body)?;

    UserService::new(&state.db)
        .forgot_password(&email, &state.mailer)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::success("Token sent to email!")),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/resetPassword/{token}",
    tag = AUTH_TAG,
    params(
        ("token" = String, Path, description = "Password reset token")
    ),
    responses(
        (status = 500, description = "Not implemented", body = MessageDto)
    ),
)]
pub async fn reset_password(Path(_token): Path<String>) -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageDto::error("This route has not been implemented yet")),
    )
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/updatePassword",
    tag = AUTH_TAG,
    responses(
        (status = 500, description = "Not implemented", body = MessageDto)
    ),
)]
pub async fn update_password() -> impl IntoResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageDto::error("This route has not been implemented yet")),
    )
}
