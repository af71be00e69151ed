use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use entity::user::Role;

use crate::{
    controller::JsonBody,
    dto::{
        api::{CollectionDto, DocumentDto, MessageDto, ValidationErrorsDto},
        user::{UserData, UsersData},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    service::user::UserService,
    state::AppState,
    validation::{
        tour::parse_tour_id,
        user::{parse_create_user_body, parse_update_profile_body, parse_update_user_body},
        FieldError, ValidationFailure,
    },
};

pub static USER_TAG: &str = "users";

/// Parses the `{id}` path segment of user routes.
fn parse_user_id(raw: &str) -> Result<i32, Vec<FieldError>> {
    // Same shape as tour IDs; reuse the parser but keep the message generic.
    parse_tour_id(raw).map_err(|_| vec![FieldError::new("id", "Invalid user ID")])
}

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = CollectionDto<UsersData>),
        (status = 401, description = "Not authenticated", body = MessageDto),
        (status = 403, description = "Role not allowed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &headers)
        .require(&[Role::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;
    let users: Vec<_> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(CollectionDto::new(users.len(), 1, UsersData { users })),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = DocumentDto<UserData>),
        (status = 400, description = "Invalid user ID", body = ValidationErrorsDto),
        (status = 401, description = "Not authenticated", body = MessageDto),
        (status = 403, description = "Role not allowed", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &headers)
        .require(&[Role::Admin])
        .await?;

    let id = parse_user_id(&id).map_err(ValidationFailure::in_params)?;

    let user = UserService::new(&state.db).get(id).await?;

    Ok((
        StatusCode::OK,
        Json(DocumentDto::new(UserData {
            user: user.into_dto(),
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = USER_TAG,
    request_body = Object,
    responses(
        (status = 201, description = "Successfully created user", body = DocumentDto<UserData>),
        (status = 400, description = "Invalid user data", body = ValidationErrorsDto),
        (status = 401, description = "Not authenticated", body = MessageDto),
        (status = 403, description = "Role not allowed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &headers)
        .require(&[Role::Admin])
        .await?;

    let input = parse_create_user_body(body).map_err(ValidationFailure::in_body)?;

    let user = UserService::new(&state.db).create(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(DocumentDto::new(UserData {
            user: user.into_dto(),
        })),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Successfully updated user", body = DocumentDto<UserData>),
        (status = 400, description = "Invalid user data", body = ValidationErrorsDto),
        (status = 401, description = "Not authenticated", body = MessageDto),
        (status = 403, description = "Role not allowed", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &headers)
        .require(&[Role::Admin])
        .await?;

    let id = parse_user_id(&id).map_err(ValidationFailure::in_params)?;
    let input = parse_update_user_body(body).map_err(ValidationFailure::in_body)?;

    let user = UserService::new(&state.db).update(id, input).await?;

    Ok((
        StatusCode::OK,
        Json(DocumentDto::new(UserData {
            user: user.into_dto(),
        })),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 400, description = "Invalid user ID", body = ValidationErrorsDto),
        (status = 401, description = "Not authenticated", body = MessageDto),
        (status = 403, description = "Role not allowed", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &headers)
        .require(&[Role::Admin])
        .await?;

    let id = parse_user_id(&id).map_err(ValidationFailure::in_params)?;

    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    patch,
    path = "/api/v1/users/updateMyProfile",
    tag = USER_TAG,
    request_body = Object,
    responses(
        (status = 200, description = "Successfully updated profile", body = DocumentDto<UserData>),
        (status = 400, description = "Invalid profile data", body = ValidationErrorsDto),
        (status = 401, description = "Not authenticated", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let input = parse_update_profile_body(body).map_err(ValidationFailure::in_body)?;

    let updated = UserService::new(&state.db)
        .update_profile(user.id, input)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DocumentDto::new(UserData {
            user: updated.into_dto(),
        })),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/deleteMyProfile",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Successfully deleted profile"),
        (status = 401, description = "Not authenticated", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_my_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    UserService::new(&state.db).delete_profile(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
