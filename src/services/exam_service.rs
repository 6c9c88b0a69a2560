//! Exam service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::ExamRepository,
    error::{AppError, AppResult},
    models::{Exam, Question},
    utils::validation,
};

/// Exam service for business logic
pub struct ExamService;

impl ExamService {
    /// Create a new exam
    pub async fn create_exam(
        pool: &PgPool,
        title: &str,
        description: Option<&str>,
        category: &str,
        difficulty: &str,
        duration_minutes: i32,
        is_active: bool,
    ) -> AppResult<Exam> {
        let title = validation::validate_title(title)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_exam_category(category)
            .map_err(|e| AppError::Validation(e.to_string()))?;
        validation::validate_difficulty(difficulty)
            .map_err(|e| AppError::Validation(e.to_string()))?;

        ExamRepository::create(
            pool,
            &title,
            description,
            category,
            difficulty,
            duration_minutes,
            is_active,
        )
        .await
    }

    /// Get exam by ID
    pub async fn get_exam(pool: &PgPool, id: &Uuid) -> AppResult<Exam> {
        ExamRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Exam not found".to_string()))
    }

    /// Update exam
    pub async fn update_exam(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        category: Option<&str>,
        difficulty: Option<&str>,
        duration_minutes: Option<i32>,
        is_active: Option<bool>,
    ) -> AppResult<Exam> {
        if let Some(category) = category {
            validation::validate_exam_category(category)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(difficulty) = difficulty {
            validation::validate_difficulty(difficulty)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }

        ExamRepository::update(
            pool,
            id,
            title,
            description,
            category,
            difficulty,
            duration_minutes,
            is_active,
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Exam not found".to_string()))
    }

    /// Delete exam along with its questions
    pub async fn delete_exam(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        if !ExamRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Exam not found".to_string()));
        }

        Ok(())
    }

    /// List exams with optional filters
    pub async fn list_exams(
        pool: &PgPool,
        limit: i64,
        skip: i64,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> AppResult<Vec<Exam>> {
        if let Some(category) = category {
            validation::validate_exam_category(category)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }
        if let Some(difficulty) = difficulty {
            validation::validate_difficulty(difficulty)
                .map_err(|e| AppError::Validation(e.to_string()))?;
        }

        ExamRepository::list(pool, skip, limit, category, difficulty).await
    }

    // =========================================================================
    // Questions
    // =========================================================================

    /// Add a question to an exam
    pub async fn add_question(
        pool: &PgPool,
        exam_id: &Uuid,
        text: &str,
        options: &[String],
        correct_answer: i32,
        explanation: Option<&str>,
    ) -> AppResult<Question> {
        // Verify exam exists
        Self::get_exam(pool, exam_id).await?;

        validation::validate_answer_index(correct_answer, options.len())
            .map_err(|e| AppError::Validation(e.to_string()))?;

        ExamRepository::create_question(pool, exam_id, text, options, correct_answer, explanation)
            .await
    }

    /// Get a question scoped by its exam
    pub async fn get_question(
        pool: &PgPool,
        exam_id: &Uuid,
        question_id: &Uuid,
    ) -> AppResult<Question> {
        ExamRepository::find_question(pool, exam_id, question_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Question not found in exam".to_string()))
    }

    /// List all questions of an exam
    pub async fn list_questions(pool: &PgPool, exam_id: &Uuid) -> AppResult<Vec<Question>> {
        // Verify exam exists
        Self::get_exam(pool, exam_id).await?;

        ExamRepository::list_questions(pool, exam_id).await
    }

    /// Update a question, keeping the correct-answer index within the options
    pub async fn update_question(
        pool: &PgPool,
        exam_id: &Uuid,
        question_id: &Uuid,
        text: Option<&str>,
        options: Option<&[String]>,
        correct_answer: Option<i32>,
        explanation: Option<&str>,
    ) -> AppResult<Question> {
        let existing = Self::get_question(pool, exam_id, question_id).await?;

        // The index invariant must hold against whichever options end up stored
        let effective_options = options.unwrap_or(&existing.options);
        let effective_answer = correct_answer.unwrap_or(existing.correct_answer);
        validation::validate_answer_index(effective_answer, effective_options.len())
            .map_err(|e| AppError::Validation(e.to_string()))?;

        ExamRepository::update_question(
            pool,
            exam_id,
            question_id,
            text,
            options,
            correct_answer,
            explanation,
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Question not found in exam".to_string()))
    }

    /// Delete a question scoped by its exam
    pub async fn delete_question(
        pool: &PgPool,
        exam_id: &Uuid,
        question_id: &Uuid,
    ) -> AppResult<()> {
        if !ExamRepository::delete_question(pool, exam_id, question_id).await? {
            return Err(AppError::NotFound("Question not found in exam".to_string()));
        }

        Ok(())
    }
}
