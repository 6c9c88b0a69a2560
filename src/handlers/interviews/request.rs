//! Interview request DTOs

use serde::Deserialize;
use validator::Validate;

/// Create interview question request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewQuestionRequest {
    #[validate(length(min = 1))]
    pub question: String,

    pub sample_answer: Option<String>,

    /// Defaults to technical
    pub category: Option<String>,

    /// Defaults to medium
    pub difficulty: Option<String>,

    pub tips_for_answering: Option<String>,

    pub year_asked: Option<i32>,
}

/// Update interview question request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterviewQuestionRequest {
    #[validate(length(min = 1))]
    pub question: Option<String>,

    pub sample_answer: Option<String>,

    pub category: Option<String>,

    pub difficulty: Option<String>,

    pub tips_for_answering: Option<String>,

    pub year_asked: Option<i32>,
}

/// Query parameters for the interview question listing
#[derive(Debug, Deserialize)]
pub struct ListInterviewQuestionsQuery {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}
