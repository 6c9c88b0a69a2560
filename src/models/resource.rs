//! Study resource model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Study resource database model
///
/// File metadata fields describe externally hosted content; this service
/// stores them as plain data and does not serve files itself.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
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
