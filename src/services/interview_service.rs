//! Interview question service

use chrono::Datelike;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::MIN_YEAR_ASKED,
    db::repositories::InterviewRepository,
    error::{AppError, AppResult},
    models::InterviewQuestion,
    utils::{time, validation},
};

/// Interview question service for business logic
pub struct InterviewService;

impl InterviewService {
    /// Create a new interview question
    pub async fn create_question(
        pool: &PgPool,
        question: &str,
        sample_answer: Option<&str>,
        category: &str,
        difficulty: &str,
        tips_for_answering: Option<&str>,
        year_asked: Option<i32>,
    ) -> AppResult<InterviewQuestion> {
        Self::validate_fields(Some(category), Some(difficulty), year_asked)?;

        InterviewRepository::create(
            pool,
            question,
            sample_answer,
            category,
            difficulty,
            tips_for_answering,
            year_asked,
        )
        .await
    }

    /// Get interview question by ID
    pub async fn get_question(pool: &PgPool, id: &Uuid) -> AppResult<InterviewQuestion> {
        InterviewRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Interview question not found".to_string()))
    }

    /// Update an interview question
    pub async fn update_question(
        pool: &PgPool,
        id: &Uuid,
        question: Option<&str>,
        sample_answer: Option<&str>,
        category: Option<&str>,
        difficulty: Option<&str>,
        tips_for_answering: Option<&str>,
        year_asked: Option<i32>,
    ) -> AppResult<InterviewQuestion> {
        Self::validate_fields(category, difficulty, year_asked)?;

        InterviewRepository::update(
            pool,
            id,
            question,
            sample_answer,
            category,
            difficulty,
            tips_for_answering,
            year_asked,
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Interview question not found".to_string()))
    }

    /// Delete an interview question
    pub async fn delete_question(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !InterviewRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Interview question not found".to_string()));
        }

        Ok(())
    }

    /// List interview questions with optional filters
    pub async fn list_questions(
        pool: &PgPool,
        limit: i64,
        skip: i64,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> AppResult<Vec<InterviewQuestion>> {
        Self::validate_fields(category, difficulty, None)?;

        InterviewRepository::list(pool, skip, limit, category, difficulty).await
    }

    /// Validate category/difficulty vocabulary and the year-asked range
    fn validate_fields(
        category: Option<&str>,
        difficulty: Option<&str>,
        year_asked: Option<i32>,
    ) -> AppResult<()> {
        if let Some(category) = category {
            validation::validate_interview_category(category)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(difficulty) = difficulty {
            validation::validate_difficulty(difficulty)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(year) = year_asked {
            let current_year = time::now_utc().year();
            if year < MIN_YEAR_ASKED || year > current_year {
                return Err(AppError::Validation(format!(
                    "yearAsked must be between {} and {}",
                    MIN_YEAR_ASKED, current_year
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_fields_vocabulary() {
        assert!(InterviewService::validate_fields(Some("technical"), Some("easy"), None).is_ok());
        assert!(InterviewService::validate_fields(Some("smalltalk"), None, None).is_err());
        assert!(InterviewService::validate_fields(None, Some("brutal"), None).is_err());
    }

    #[test]
    fn test_validate_year_asked_range() {
        let current_year = time::now_utc().year();
        assert!(InterviewService::validate_fields(None, None, Some(current_year)).is_ok());
        assert!(InterviewService::validate_fields(None, None, Some(MIN_YEAR_ASKED)).is_ok());
        assert!(InterviewService::validate_fields(None, None, Some(1999)).is_err());
        assert!(InterviewService::validate_fields(None, None, Some(current_year + 1)).is_err());
    }
}
