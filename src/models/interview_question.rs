//! Interview question model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Interview preparation question
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub id: Uuid,
    pub question: String,
    pub sample_answer: Option<String>,
    pub category: String,
    pub difficulty: String,
    pub tips_for_answering: Option<String>,
    pub year_asked: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
