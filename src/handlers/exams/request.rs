//! Exam request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_TITLE_LENGTH, MIN_QUESTION_OPTIONS};

/// Create exam request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExamRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: String,

    pub description: Option<String>,

    /// Defaults to pilotTrainee
    pub category: Option<String>,

    /// Defaults to medium
    pub difficulty: Option<String>,

    #[validate(range(min = 0))]
    pub duration_minutes: Option<i32>,

    pub is_active: Option<bool>,
}

/// Update exam request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExamRequest {
    #[validate(length(min = 1, max = MAX_TITLE_LENGTH))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub category: Option<String>,

    pub difficulty: Option<String>,

    #[validate(range(min = 0))]
    pub duration_minutes: Option<i32>,

    pub is_active: Option<bool>,
}

/// Query parameters for the exam listing
#[derive(Debug, Deserialize)]
pub struct ListExamsQuery {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

/// Create question request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1))]
    pub text: String,

    #[validate(length(min = MIN_QUESTION_OPTIONS))]
    pub options: Vec<String>,

    /// 0-based index of the correct answer in `options`
    #[validate(range(min = 0))]
    pub correct_answer: i32,

    pub explanation: Option<String>,
}

/// Update question request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionRequest {
    #[validate(length(min = 1))]
    pub text: Option<String>,

    #[validate(length(min = MIN_QUESTION_OPTIONS))]
    pub options: Option<Vec<String>>,

    #[validate(range(min = 0))]
    pub correct_answer: Option<i32>,

    pub explanation: Option<String>,
}
