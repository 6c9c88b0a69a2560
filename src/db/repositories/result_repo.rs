//! Exam result repository

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::ExamResult};

/// Repository for exam result database operations
pub struct ResultRepository;

impl ResultRepository {
    /// Persist a graded attempt
    pub async fn create(
        pool: &PgPool,
        user_id: &Uuid,
        exam_id: &Uuid,
        score: f64,
        total_questions: i32,
        correct_answers: i32,
        answer_details: serde_json::Value,
    ) -> AppResult<ExamResult> {
        let result = sqlx::query_as::<_, ExamResult>(
            r#"
            INSERT INTO exam_results
                (user_id, exam_id, score, total_questions, correct_answers, answer_details)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(exam_id)
        .bind(score)
        .bind(total_questions)
        .bind(correct_answers)
        .bind(answer_details)
        .fetch_one(pool)
        .await?;

        Ok(result)
    }

    /// List a user's results for one exam, newest first
    pub async fn list_by_user_and_exam(
        pool: &PgPool,
        user_id: &Uuid,
        exam_id: &Uuid,
    ) -> AppResult<Vec<ExamResult>> {
        let results = sqlx::query_as::<_, ExamResult>(
            r#"
            SELECT * FROM exam_results
            WHERE user_id = $1 AND exam_id = $2
            ORDER BY completed_at DESC
            "#,
        )
        .bind(user_id)
        .bind(exam_id)
        .fetch_all(pool)
        .await?;

        Ok(results)
    }

    /// Count total exam attempts
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM exam_results"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Count distinct users who completed an exam since a cutoff
    pub async fn count_active_users_since(
        pool: &PgPool,
        since: DateTime<Utc>,
    ) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(DISTINCT user_id) FROM exam_results WHERE completed_at >= $1"#,
        )
        .bind(since)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Average score over every attempt in the system (0 when empty)
    pub async fn average_score(pool: &PgPool) -> AppResult<f64> {
        let avg: f64 =
            sqlx::query_scalar(r#"SELECT COALESCE(AVG(score), 0)::float8 FROM exam_results"#)
                .fetch_one(pool)
                .await?;

        Ok(avg)
    }
}
