//! Resource handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::ResourceService,
    state::AppState,
};

use super::{
    request::{CreateResourceRequest, ListResourcesQuery, UpdateResourceRequest},
    response::{DeletedResponse, ResourceResponse},
};

/// List resources with filters
pub async fn list_resources(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListResourcesQuery>,
) -> AppResult<Json<Vec<ResourceResponse>>> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let skip = query.skip.unwrap_or(0).max(0);

    let resources = ResourceService::list_resources(
        state.db(),
        limit,
        skip,
        query.resource_type.as_deref(),
        query.category.as_deref(),
        query.tag.as_deref(),
        query.search.as_deref(),
    )
    .await?;

    Ok(Json(resources.into_iter().map(ResourceResponse::from).collect()))
}

/// Create a new resource (admin only)
pub async fn create_resource(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateResourceRequest>,
) -> AppResult<(StatusCode, Json<ResourceResponse>)> {
    payload.validate()?;

    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Only admins can create resources".to_string()));
    }

    let resource = ResourceService::create_resource(
        state.db(),
        &payload.title,
        payload.description.as_deref(),
        &payload.resource_type,
        payload.category.as_deref(),
        payload.author.as_deref(),
        &payload.tags.unwrap_or_default(),
        payload.file_url.as_deref(),
        payload.file_size,
        payload.mime_type.as_deref(),
        payload.external_url.as_deref(),
        payload.is_active.unwrap_or(true),
        payload.published_date,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ResourceResponse::from(resource))))
}

/// Distinct categories currently in use
pub async fn list_categories(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<String>>> {
    let categories = ResourceService::list_categories(state.db()).await?;
    Ok(Json(categories))
}

/// Distinct tags currently in use
pub async fn list_tags(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
) -> AppResult<Json<Vec<String>>> {
    let tags = ResourceService::list_tags(state.db()).await?;
    Ok(Json(tags))
}

/// Get a specific resource
pub async fn get_resource(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ResourceResponse>> {
    let resource = ResourceService::get_resource(state.db(), &id).await?;
    Ok(Json(ResourceResponse::from(resource)))
}

/// Update a resource (admin only)
pub async fn update_resource(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateResourceRequest>,
) -> AppResult<Json<ResourceResponse>> {
    payload.validate()?;

    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Only admins can update resources".to_string()));
    }

    let resource = ResourceService::update_resource(
        state.db(),
        &id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.resource_type.as_deref(),
        payload.category.as_deref(),
        payload.author.as_deref(),
        payload.tags.as_deref(),
        payload.file_url.as_deref(),
        payload.file_size,
        payload.mime_type.as_deref(),
        payload.external_url.as_deref(),
        payload.is_active,
        payload.published_date,
    )
    .await?;

    Ok(Json(ResourceResponse::from(resource)))
}

/// Delete a resource (admin only)
pub async fn delete_resource(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletedResponse>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Only admins can delete resources".to_string()));
    }

    ResourceService::delete_resource(state.db(), &id).await?;

    Ok(Json(DeletedResponse { deleted: true }))
}
