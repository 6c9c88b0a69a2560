//! Progress request DTOs

use serde::Deserialize;
use validator::Validate;

/// Exam submission request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitExamRequest {
    /// 0-based answer indices, in the same order as the exam's questions
    #[validate(length(min = 1))]
    pub answers: Vec<i32>,
}

/// Sort direction for the result listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Query parameters for the result listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressQuery {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
    /// `completedAt` (default) or `score`
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}
