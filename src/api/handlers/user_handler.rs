//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::AppJson;
use crate::api::AppState;
use crate::domain::{AppInfo, User, UserPayload};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, PlainCount};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/count", get(count_users))
        .route("/info", get(app_info))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in creation order", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created with a store-assigned id", body = User),
        (status = 400, description = "Malformed JSON body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UserPayload>,
) -> AppResult<Created<User>> {
    let user = state.user_service.create_user(payload).await?;
    Ok(Created(user))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Malformed JSON body"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<UserPayload>,
) -> AppResult<Json<User>> {
    let user = state.user_service.update_user(id, payload).await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<NoContent> {
    state.user_service.delete_user(id).await?;
    Ok(NoContent)
}

/// Count users
#[utoipa::path(
    get,
    path = "/api/users/count",
    tag = "Users",
    responses(
        (status = 200, description = "Number of users as a plain integer", body = u64, content_type = "text/plain")
    )
)]
pub async fn count_users(State(state): State<AppState>) -> AppResult<PlainCount> {
    let count = state.user_service.count_users().await?;
    Ok(PlainCount(count))
}

/// Application metadata
#[utoipa::path(
    get,
    path = "/api/users/info",
    tag = "Users",
    responses(
        (status = 200, description = "Application name, version and environment", body = AppInfo)
    )
)]
pub async fn app_info(State(state): State<AppState>) -> Json<AppInfo> {
    Json(state.app_info.as_ref().clone())
}
