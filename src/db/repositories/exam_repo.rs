//! Exam repository
//!
//! Handles exams and their nested questions.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Exam, Question},
};

/// Repository for exam and question database operations
pub struct ExamRepository;

impl ExamRepository {
    /// Create a new exam
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: Option<&str>,
        category: &str,
        difficulty: &str,
        duration_minutes: i32,
        is_active: bool,
    ) -> AppResult<Exam> {
        let exam = sqlx::query_as::<_, Exam>(
            r#"
            INSERT INTO exams (title, description, category, difficulty, duration_minutes, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(difficulty)
        .bind(duration_minutes)
        .bind(is_active)
        .fetch_one(pool)
        .await?;

        Ok(exam)
    }

    /// Find exam by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Exam>> {
        let exam = sqlx::query_as::<_, Exam>(r#"SELECT * FROM exams WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(exam)
    }

    /// Update exam (absent fields keep their current values)
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        title: Option<&str>,
        description: Option<&str>,
        category: Option<&str>,
        difficulty: Option<&str>,
        duration_minutes: Option<i32>,
        is_active: Option<bool>,
    ) -> AppResult<Option<Exam>> {
        let exam = sqlx::query_as::<_, Exam>(
            r#"
            UPDATE exams
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                difficulty = COALESCE($5, difficulty),
                duration_minutes = COALESCE($6, duration_minutes),
                is_active = COALESCE($7, is_active),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(category)
        .bind(difficulty)
        .bind(duration_minutes)
        .bind(is_active)
        .fetch_optional(pool)
        .await?;

        Ok(exam)
    }

    /// Delete exam (questions and results cascade)
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM exams WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List exams with optional category/difficulty filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> AppResult<Vec<Exam>> {
        let exams = sqlx::query_as::<_, Exam>(
            r#"
            SELECT * FROM exams
            WHERE
                ($1::text IS NULL OR category = $1)
                AND ($2::text IS NULL OR difficulty = $2)
            ORDER BY created_at DESC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(category)
        .bind(difficulty)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(exams)
    }

    /// Count total exams
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM exams"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    // =========================================================================
    // Questions
    // =========================================================================

    /// Add a question to an exam
    pub async fn create_question(
        pool: &PgPool,
        exam_id: &Uuid,
        text: &str,
        options: &[String],
        correct_answer: i32,
        explanation: Option<&str>,
    ) -> AppResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (exam_id, text, options, correct_answer, explanation)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(exam_id)
        .bind(text)
        .bind(options)
        .bind(correct_answer)
        .bind(explanation)
        .fetch_one(pool)
        .await?;

        Ok(question)
    }

    /// Find a question scoped by its exam
    pub async fn find_question(
        pool: &PgPool,
        exam_id: &Uuid,
        question_id: &Uuid,
    ) -> AppResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"SELECT * FROM questions WHERE id = $1 AND exam_id = $2"#,
        )
        .bind(question_id)
        .bind(exam_id)
        .fetch_optional(pool)
        .await?;

        Ok(question)
    }

    /// List all questions of an exam in creation order
    pub async fn list_questions(pool: &PgPool, exam_id: &Uuid) -> AppResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"SELECT * FROM questions WHERE exam_id = $1 ORDER BY created_at"#,
        )
        .bind(exam_id)
        .fetch_all(pool)
        .await?;

        Ok(questions)
    }

    /// Update a question (absent fields keep their current values)
    pub async fn update_question(
        pool: &PgPool,
        exam_id: &Uuid,
        question_id: &Uuid,
        text: Option<&str>,
        options: Option<&[String]>,
        correct_answer: Option<i32>,
        explanation: Option<&str>,
    ) -> AppResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET
                text = COALESCE($3, text),
                options = COALESCE($4, options),
                correct_answer = COALESCE($5, correct_answer),
                explanation = COALESCE($6, explanation),
                updated_at = NOW()
            WHERE id = $1 AND exam_id = $2
            RETURNING *
            "#,
        )
        .bind(question_id)
        .bind(exam_id)
        .bind(text)
        .bind(options)
        .bind(correct_answer)
        .bind(explanation)
        .fetch_optional(pool)
        .await?;

        Ok(question)
    }

    /// Delete a question scoped by its exam
    pub async fn delete_question(
        pool: &PgPool,
        exam_id: &Uuid,
        question_id: &Uuid,
    ) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM questions WHERE id = $1 AND exam_id = $2"#)
            .bind(question_id)
            .bind(exam_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total questions across all exams
    pub async fn count_questions(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM questions"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
