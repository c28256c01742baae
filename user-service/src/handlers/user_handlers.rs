use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use log::info;
use roster_shared::{
    models::{ErrorResponse, User},
    service::UserService,
    store::UserRepository,
};
use std::sync::Arc;

use super::{json_body, parse_user_id};
use crate::error::{AppError, Result};

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users, empty when there are none", body = [User]),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_users<R>(State(service): State<Arc<UserService<R>>>) -> Result<Json<Vec<User>>>
where
    R: UserRepository,
{
    let users = service.get_all().await?;
    Ok(Json(users))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id (UUID)")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_user<R>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<User>>
where
    R: UserRepository,
{
    let id = parse_user_id(&id)?;

    service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("User not found: {}", id)))
}

/// Get a user by email
#[utoipa::path(
    get,
    path = "/users/email/{email}",
    tag = "Users",
    params(
        ("email" = String, Path, description = "Exact, case-sensitive email")
    ),
    responses(
        (status = 200, description = "First user with this email", body = User),
        (status = 404, description = "No user has this email", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn get_user_by_email<R>(
    State(service): State<Arc<UserService<R>>>,
    Path(email): Path<String>,
) -> Result<Json<User>>
where
    R: UserRepository,
{
    service
        .get_by_email(&email)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("User not found with email: {}", email)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = User,
            headers(("Location" = String, description = "Path of the new user"))),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_user<R>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    payload: std::result::Result<Json<User>, JsonRejection>,
) -> Result<impl IntoResponse>
where
    R: UserRepository,
{
    let user = json_body(payload)?;
    let created = service.create_user(user).await?;

    // Location points at GET /users/:id under whatever prefix this request came through
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), created.id);
    info!("User created, location={}", location);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Replace a user's name and email
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id (UUID)")
    ),
    request_body = User,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_user<R>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<User>, JsonRejection>,
) -> Result<StatusCode>
where
    R: UserRepository,
{
    let id = parse_user_id(&id)?;
    let mut user = json_body(payload)?;

    // The route decides which user is updated, not the body
    user.id = id;

    if !service.update_user(&user).await? {
        return Err(AppError::NotFound(format!("User not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User id (UUID)")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_user<R>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode>
where
    R: UserRepository,
{
    let id = parse_user_id(&id)?;

    if !service.delete_user(id).await? {
        return Err(AppError::NotFound(format!("User not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
