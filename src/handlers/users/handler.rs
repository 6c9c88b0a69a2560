//! User handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::UserService,
    state::AppState,
};

use super::{
    request::{ListUsersQuery, UpdateUserRequest},
    response::{DeletedResponse, UserProfileResponse},
};

/// List all users (admin only)
pub async fn list_users(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<Vec<UserProfileResponse>>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let skip = query.skip.unwrap_or(0).max(0);

    let users = UserService::list_users(
        state.db(),
        limit,
        skip,
        query.search.as_deref(),
        query.role.as_deref(),
    )
    .await?;

    Ok(Json(users.into_iter().map(UserProfileResponse::from).collect()))
}

/// Get a specific user by ID
pub async fn get_user(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserProfileResponse>> {
    let user = UserService::get_user_by_id(state.db(), &id).await?;

    Ok(Json(UserProfileResponse::from(user)))
}

/// Update user profile (self or admin)
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserProfileResponse>> {
    // Validate request
    payload.validate()?;

    let user = UserService::update_user(
        state.db(),
        &auth_user.id,
        auth_user.is_admin(),
        &id,
        payload.name.as_deref(),
        payload.email.as_deref(),
        payload.password.as_deref(),
        payload.roles,
    )
    .await?;

    Ok(Json(UserProfileResponse::from(user)))
}

/// Delete a user (admin only)
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletedResponse>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }

    UserService::delete_user(state.db(), &id).await?;

    Ok(Json(DeletedResponse { deleted: true }))
}
