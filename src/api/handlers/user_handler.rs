//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{ApiJson, ApiQuery};
use crate::api::AppState;
use crate::domain::{CreateUser, UserResponse};
use crate::errors::{AppResult, ErrorResponse};
use crate::types::ListParams;

/// Create user routes.
///
/// The collection answers on both `/users` and `/users/`.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/:username", get(get_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User registered", body = UserResponse),
        (status = 400, description = "Email already registered", body = ErrorResponse),
        (status = 422, description = "Malformed or incomplete body", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Json(UserResponse::from(user)))
}

/// List users in registration order
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    params(ListParams),
    responses(
        (status = 200, description = "Page of users", body = Vec<UserResponse>),
        (status = 422, description = "Non-integer skip or limit", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state
        .user_service
        .list_users(params.offset(), params.limit())
        .await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by username
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "Users",
    params(
        ("username" = String, Path, description = "Username to look up")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user_by_username(&username).await?;
    Ok(Json(UserResponse::from(user)))
}
