//! Progress response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::ExamResult;

/// Full exam result, returned after a submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResultResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exam_id: Uuid,
    pub score: f64,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub answer_details: serde_json::Value,
    pub completed_at: DateTime<Utc>,
}

impl From<ExamResult> for ExamResultResponse {
    fn from(result: ExamResult) -> Self {
        Self {
            id: result.id,
            user_id: result.user_id,
            exam_id: result.exam_id,
            score: result.score,
            total_questions: result.total_questions,
            correct_answers: result.correct_answers,
            answer_details: result.answer_details,
            completed_at: result.completed_at,
        }
    }
}

/// Result row joined with exam metadata
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResultWithExam {
    pub id: Uuid,
    pub exam_id: Uuid,
    pub exam_title: String,
    pub exam_category: String,
    pub exam_difficulty: String,
    pub score: f64,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub completed_at: DateTime<Utc>,
}

/// Monthly average-score bucket, keyed by `YYYY-MM`
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyScore {
    pub month: String,
    pub average_score: f64,
    pub count: i64,
}

/// Per-user progress summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStatsResponse {
    pub total_exams_taken: i64,
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    pub recent_results: Vec<ResultWithExam>,
    pub progress_over_time: Vec<MonthlyScore>,
}
