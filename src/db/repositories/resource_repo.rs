//! Study resource repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Resource};

/// Repository for study resource database operations
pub struct ResourceRepository;

impl ResourceRepository {
    /// Create a new resource
    pub async fn create(
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
        let resource = sqlx::query_as::<_, Resource>(
            r#"
            INSERT INTO resources (
                title, description, resource_type, category, author, tags,
                file_url, file_size, mime_type, external_url, is_active, published_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(resource_type)
        .bind(category)
        .bind(author)
        .bind(tags)
        .bind(file_url)
        .bind(file_size)
        .bind(mime_type)
        .bind(external_url)
        .bind(is_active)
        .bind(published_date)
        .fetch_one(pool)
        .await?;

        Ok(resource)
    }

    /// Find resource by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Resource>> {
        let resource = sqlx::query_as::<_, Resource>(r#"SELECT * FROM resources WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(resource)
    }

    /// Update resource (absent fields keep their current values)
    pub async fn update(
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
    ) -> AppResult<Option<Resource>> {
        let resource = sqlx::query_as::<_, Resource>(
            r#"
            UPDATE resources
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                resource_type = COALESCE($4, resource_type),
                category = COALESCE($5, category),
                author = COALESCE($6, author),
                tags = COALESCE($7, tags),
                file_url = COALESCE($8, file_url),
                file_size = COALESCE($9, file_size),
                mime_type = COALESCE($10, mime_type),
                external_url = COALESCE($11, external_url),
                is_active = COALESCE($12, is_active),
                published_date = COALESCE($13, published_date),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(resource_type)
        .bind(category)
        .bind(author)
        .bind(tags)
        .bind(file_url)
        .bind(file_size)
        .bind(mime_type)
        .bind(external_url)
        .bind(is_active)
        .bind(published_date)
        .fetch_optional(pool)
        .await?;

        Ok(resource)
    }

    /// Delete resource
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM resources WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List resources with filters, newest first
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        resource_type: Option<&str>,
        category: Option<&str>,
        tag: Option<&str>,
        search: Option<&str>,
    ) -> AppResult<Vec<Resource>> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let resources = sqlx::query_as::<_, Resource>(
            r#"
            SELECT * FROM resources
            WHERE
                ($1::text IS NULL OR resource_type = $1)
                AND ($2::text IS NULL OR category = $2)
                AND ($3::text IS NULL OR $3 = ANY(tags))
                AND ($4::text IS NULL OR title ILIKE $4 OR description ILIKE $4)
            ORDER BY created_at DESC
            OFFSET $5 LIMIT $6
            "#,
        )
        .bind(resource_type)
        .bind(category)
        .bind(tag)
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(resources)
    }

    /// Distinct categories currently in use
    pub async fn distinct_categories(pool: &PgPool) -> AppResult<Vec<String>> {
        let categories: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT category FROM resources
            WHERE category IS NOT NULL
            ORDER BY category
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(categories)
    }

    /// Distinct tags currently in use
    pub async fn distinct_tags(pool: &PgPool) -> AppResult<Vec<String>> {
        let tags: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT tag FROM resources, unnest(tags) AS tag
            ORDER BY tag
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tags)
    }
}
