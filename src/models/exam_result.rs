//! Exam result model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Graded exam attempt
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exam_id: Uuid,
    /// Percentage score in 0..=100
    pub score: f64,
    pub total_questions: i32,
    pub correct_answers: i32,
    /// Per-question grading detail, serialized as a JSON array
    pub answer_details: serde_json::Value,
    pub completed_at: DateTime<Utc>,
}

/// Grading detail for a single question within an attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDetail {
    pub question_id: Uuid,
    pub question_text: String,
    pub user_answer: i32,
    pub correct_answer: i32,
    pub is_correct: bool,
}
