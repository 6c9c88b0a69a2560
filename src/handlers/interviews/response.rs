//! Interview response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::InterviewQuestion;

/// Interview question response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionResponse {
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

impl From<InterviewQuestion> for InterviewQuestionResponse {
    fn from(question: InterviewQuestion) -> Self {
        Self {
            id: question.id,
            question: question.question,
            sample_answer: question.sample_answer,
            category: question.category,
            difficulty: question.difficulty,
            tips_for_answering: question.tips_for_answering,
            year_asked: question.year_asked,
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }
}

/// Deletion acknowledgement
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}
