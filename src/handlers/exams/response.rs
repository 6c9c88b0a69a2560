//! Exam response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Exam, Question};

/// Exam response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub difficulty: String,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Exam> for ExamResponse {
    fn from(exam: Exam) -> Self {
        Self {
            id: exam.id,
            title: exam.title,
            description: exam.description,
            category: exam.category,
            difficulty: exam.difficulty,
            duration_minutes: exam.duration_minutes,
            is_active: exam.is_active,
            created_at: exam.created_at,
            updated_at: exam.updated_at,
        }
    }
}

/// Question response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: Uuid,
    pub exam_id: Uuid,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: i32,
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            exam_id: question.exam_id,
            text: question.text,
            options: question.options,
            correct_answer: question.correct_answer,
            explanation: question.explanation,
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
