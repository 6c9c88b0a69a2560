//! Study resource service

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::ResourceRepository,
    error::{AppError, AppResult},
    models::Resource,
    utils::validation,
};

/// Resource service for business logic
pub struct ResourceService;

impl ResourceService {
    /// Create a new resource
    pub async fn create_resource(
        pool: &PgPool,
        title: &str,
        description: Option<&str>,
        resource_type: &str,
        category: Option<&str>,
        author: Option<&str>,
        tags: &[String],
        file_url: Option<&str>,
        file_size: Option<i64>,
        mime_type: Option<&str>,
        external_url: Option<&str>,
        is_active: bool,
        published_date: Option<DateTime<Utc>>,
    ) -> AppResult<Resource> {
        let title = validation::validate_title(title)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Self::validate_vocabulary(Some(resource_type), category, tags)?;

        ResourceRepository::create(
            pool,
            &title,
            description,
            resource_type,
            category,
            author,
            tags,
            file_url,
            file_size,
            mime_type,
            external_url,
            is_active,
            published_date,
        )
        .await
    }

    /// Get resource by ID
    pub async fn get_resource(pool: &PgPool, id: &Uuid) -> AppResult<Resource> {
        ResourceRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))
    }

    /// Update a resource
    pub async fn update_resource(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        resource_type: Option<&str>,
        category: Option<&str>,
        author: Option<&str>,
        tags: Option<&[String]>,
        file_url: Option<&str>,
        file_size: Option<i64>,
        mime_type: Option<&str>,
        external_url: Option<&str>,
        is_active: Option<bool>,
        published_date: Option<DateTime<Utc>>,
    ) -> AppResult<Resource> {
        Self::validate_vocabulary(resource_type, category, tags.unwrap_or(&[]))?;

        ResourceRepository::update(
            pool,
            id,
            title,
            description,
            resource_type,
            category,
            author,
            tags,
            file_url,
            file_size,
            mime_type,
            external_url,
            is_active,
            published_date,
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Resource not found".to_string()))
    }

    /// Delete a resource
    pub async fn delete_resource(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !ResourceRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Resource not found".to_string()));
        }

        Ok(())
    }

    /// List resources with filters
    pub async fn list_resources(
        pool: &PgPool,
        limit: i64,
        skip: i64,
        resource_type: Option<&str>,
        category: Option<&str>,
        tag: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<Vec<Resource>> {
        if let Some(resource_type) = resource_type {
            validation::validate_resource_type(resource_type)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(category) = category {
            validation::validate_resource_category(category)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }

        ResourceRepository::list(pool, skip, limit, resource_type, category, tag, search).await
    }

    /// Distinct categories currently in use
    pub async fn list_categories(pool: &PgPool) -> AppResult<Vec<String>> {
        ResourceRepository::distinct_categories(pool).await
    }

    /// Distinct tags currently in use
    pub async fn list_tags(pool: &PgPool) -> AppResult<Vec<String>> {
        ResourceRepository::distinct_tags(pool).await
    }

    /// Validate type, category and tag vocabulary for writes
    fn validate_vocabulary(
        resource_type: Option<&str>,
        category: Option<&str>,
        tags: &[String],
    ) -> AppResult<()> {
        if let Some(resource_type) = resource_type {
            validation::validate_resource_type(resource_type)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(category) = category {
            validation::validate_resource_category(category)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        for tag in tags {
            validation::validate_tag(tag).map_err(|e| AppError::Validation(e.to_string()))?;
        }

        Ok(())
    }
}
