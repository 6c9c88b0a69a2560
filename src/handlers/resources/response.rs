//! Resource response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Resource;

/// Resource response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub category: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub file_url: Option<String>,
    pub file_size: Option<i64>,
    pub mime_type: Option<String>,
    pub external_url: Option<String>,
    pub is_active: bool,
    pub published_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Resource> for ResourceResponse {
    fn from(resource: Resource) -> Self {
        Self {
            id: resource.id,
            title: resource.title,
            description: resource.description,
            resource_type: resource.resource_type,
            category: resource.category,
            author: resource.author,
            tags: resource.tags,
            file_url: resource.file_url,
            file_size: resource.file_size,
            mime_type: resource.mime_type,
            external_url: resource.external_url,
            is_active: resource.is_active,
            published_date: resource.published_date,
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        }
    }
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}
