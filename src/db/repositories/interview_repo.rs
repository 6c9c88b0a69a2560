//! Interview question repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::InterviewQuestion};

/// Repository for interview question database operations
pub struct InterviewRepository;

impl InterviewRepository {
    /// Create a new interview question
    pub async fn create(
        pool: &PgPool,
        question: &str,
        sample_answer: Option<&str>,
        category: &str,
        difficulty: &str,
        tips_for_answering: Option<&str>,
        year_asked: Option<i32>,
    ) -> AppResult<InterviewQuestion> {
        let created = sqlx::query_as::<_, InterviewQuestion>(
            r#"
            INSERT INTO interview_questions
                (question, sample_answer, category, difficulty, tips_for_answering, year_asked)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(question)
        .bind(sample_answer)
        .bind(category)
        .bind(difficulty)
        .bind(tips_for_answering)
        .bind(year_asked)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }

    /// Find interview question by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<InterviewQuestion>> {
        let question = sqlx::query_as::<_, InterviewQuestion>(
            r#"SELECT * FROM interview_questions WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(question)
    }

    /// Update interview question (absent fields keep their current values)
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        question: Option<&str>,
        sample_answer: Option<&str>,
        category: Option<&str>,
        difficulty: Option<&str>,
        tips_for_answering: Option<&str>,
        year_asked: Option<i32>,
    ) -> AppResult<Option<InterviewQuestion>> {
        let updated = sqlx::query_as::<_, InterviewQuestion>(
            r#"
            UPDATE interview_questions
            SET
                question = COALESCE($2, question),
                sample_answer = COALESCE($3, sample_answer),
                category = COALESCE($4, category),
                difficulty = COALESCE($5, difficulty),
                tips_for_answering = COALESCE($6, tips_for_answering),
                year_asked = COALESCE($7, year_asked),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(question)
        .bind(sample_answer)
        .bind(category)
        .bind(difficulty)
        .bind(tips_for_answering)
        .bind(year_asked)
        .fetch_optional(pool)
        .await?;

        Ok(updated)
    }

    /// Delete interview question
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM interview_questions WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List interview questions with optional category/difficulty filters
    pub async fn list(
        pool: &PgPool,
        offset: i64,
        limit: i64,
        category: Option<&str>,
        difficulty: Option<&str>,
    ) -> AppResult<Vec<InterviewQuestion>> {
        let questions = sqlx::query_as::<_, InterviewQuestion>(
            r#"
            SELECT * FROM interview_questions
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

        Ok(questions)
    }
}
