//! Resource request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_TITLE_LENGTH;

/// Create resource request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    pub description: Option<String>,

    #[serde(rename = "type")]
    pub resource_type: String,

    pub category: Option<String>,

    pub author: Option<String>,

    pub tags: Option<Vec<String>>,

    #[validate(url)]
    pub file_url: Option<String>,

    #[validate(range(min = 0))]
    pub file_size: Option<i64>,

    pub mime_type: Option<String>,

    #[validate(url)]
    pub external_url: Option<String>,

    pub is_active: Option<bool>,

    pub published_date: Option<DateTime<Utc>>,
}

/// Update resource request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[serde(rename = "type")]
    pub resource_type: Option<String>,

    pub category: Option<String>,

    pub author: Option<String>,

    pub tags: Option<Vec<String>>,

    #[validate(url)]
    pub file_url: Option<String>,

    #[validate(range(min = 0))]
    pub file_size: Option<i64>,

    pub mime_type: Option<String>,

    #[validate(url)]
    pub external_url: Option<String>,

    pub is_active: Option<bool>,

    pub published_date: Option<DateTime<Utc>>,
}

/// Query parameters for the resource listing
#[derive(Debug, Deserialize)]
pub struct ListResourcesQuery {
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}
