//! Progress service
//!
//! Grades exam submissions and reports per-user progress.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::stats,
    db::repositories::{ExamRepository, ResultRepository},
    error::{AppError, AppResult},
    handlers::progress::response::{MonthlyScore, ProgressStatsResponse, ResultWithExam},
    models::{AnswerDetail, ExamResult, Question},
    utils::time,
};

/// Sort keys accepted for the result listing
const SORT_COMPLETED_AT: &str = "completedAt";
const SORT_SCORE: &str = "score";

/// Progress service for business logic
pub struct ProgressService;

impl ProgressService {
    /// Grade submitted answers against the exam's questions
    ///
    /// `answers` must be the same length as `questions`, in question order.
    pub fn grade_answers(questions: &[Question], answers: &[i32]) -> (i32, Vec<AnswerDetail>) {
        let mut correct = 0;

        let details = questions
            .iter()
            .zip(answers.iter())
            .map(|(question, &answer)| {
                let is_correct = question.correct_answer == answer;
                if is_correct {
                    correct += 1;
                }

                AnswerDetail {
                    question_id: question.id,
                    question_text: question.text.clone(),
                    user_answer: answer,
                    correct_answer: question.correct_answer,
                    is_correct,
                }
            })
            .collect();

        (correct, details)
    }

    /// Submit answers for an exam, grade them and persist the result
    pub async fn submit_exam_result(
        pool: &PgPool,
        user_id: &Uuid,
        exam_id: &Uuid,
        answers: &[i32],
    ) -> AppResult<ExamResult> {
        // Verify exam exists
        ExamRepository::find_by_id(pool, exam_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Exam not found".to_string()))?;

        let questions = ExamRepository::list_questions(pool, exam_id).await?;

        if questions.is_empty() {
            return Err(AppError::InvalidInput("Exam has no questions".to_string()));
        }

        if answers.len() != questions.len() {
            return Err(AppError::InvalidInput(
                "Number of answers does not match number of questions".to_string(),
            ));
        }

        let (correct_answers, details) = Self::grade_answers(&questions, answers);
        let score = correct_answers as f64 / questions.len() as f64 * 100.0;

        let answer_details = serde_json::to_value(details)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Answer detail encoding: {}", e)))?;

        ResultRepository::create(
            pool,
            user_id,
            exam_id,
            score,
            questions.len() as i32,
            correct_answers,
            answer_details,
        )
        .await
    }

    /// List the caller's results, joined with exam metadata
    pub async fn list_results(
        pool: &PgPool,
        user_id: &Uuid,
        limit: i64,
        skip: i64,
        sort_by: Option<&str>,
        descending: bool,
    ) -> AppResult<Vec<ResultWithExam>> {
        // Sort keys are whitelisted before they reach the query text
        let sort_column = match sort_by.unwrap_or(SORT_COMPLETED_AT) {
            SORT_SCORE => "r.score",
            SORT_COMPLETED_AT => "r.completed_at",
            other => {
                return Err(AppError::Validation(format!("Unknown sort key: {}", other)));
            }
        };
        let direction = if descending { "DESC" } else { "ASC" };

        let query = format!(
            r#"
            SELECT
                r.id, r.exam_id, e.title AS exam_title, e.category AS exam_category,
                e.difficulty AS exam_difficulty, r.score, r.total_questions,
                r.correct_answers, r.completed_at
            FROM exam_results r
            JOIN exams e ON e.id = r.exam_id
            WHERE r.user_id = $1
            ORDER BY {} {}
            OFFSET $2 LIMIT $3
            "#,
            sort_column, direction
        );

        let results = sqlx::query_as::<_, ResultWithExam>(&query)
            .bind(user_id)
            .bind(skip)
            .bind(limit)
            .fetch_all(pool)
            .await?;

        Ok(results)
    }

    /// List the caller's results for one exam, newest first
    pub async fn results_for_exam(
        pool: &PgPool,
        user_id: &Uuid,
        exam_id: &Uuid,
    ) -> AppResult<Vec<ExamResult>> {
        // Verify exam exists
        ExamRepository::find_by_id(pool, exam_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Exam not found".to_string()))?;

        ResultRepository::list_by_user_and_exam(pool, user_id, exam_id).await
    }

    /// Summarize the caller's progress
    pub async fn progress_stats(pool: &PgPool, user_id: &Uuid) -> AppResult<ProgressStatsResponse> {
        #[derive(sqlx::FromRow)]
        struct Summary {
            total_exams_taken: i64,
            average_score: f64,
            highest_score: f64,
            lowest_score: f64,
        }

        let summary = sqlx::query_as::<_, Summary>(
            r#"
            SELECT
                COUNT(*) AS total_exams_taken,
                COALESCE(AVG(score), 0)::float8 AS average_score,
                COALESCE(MAX(score), 0)::float8 AS highest_score,
                COALESCE(MIN(score), 0)::float8 AS lowest_score
            FROM exam_results
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        let recent_results = sqlx::query_as::<_, ResultWithExam>(
            r#"
            SELECT
                r.id, r.exam_id, e.title AS exam_title, e.category AS exam_category,
                e.difficulty AS exam_difficulty, r.score, r.total_questions,
                r.correct_answers, r.completed_at
            FROM exam_results r
            JOIN exams e ON e.id = r.exam_id
            WHERE r.user_id = $1
            ORDER BY r.completed_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(stats::RECENT_RESULTS_LIMIT)
        .fetch_all(pool)
        .await?;

        let since = time::months_ago(stats::PROGRESS_WINDOW_MONTHS);
        let progress_over_time = sqlx::query_as::<_, MonthlyScore>(
            r#"
            SELECT
                to_char(date_trunc('month', completed_at), 'YYYY-MM') AS month,
                AVG(score)::float8 AS average_score,
                COUNT(*) AS count
            FROM exam_results
            WHERE user_id = $1 AND completed_at >= $2
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(user_id)
        .bind(since)
        .fetch_all(pool)
        .await?;

        Ok(ProgressStatsResponse {
            total_exams_taken: summary.total_exams_taken,
            average_score: summary.average_score,
            highest_score: summary.highest_score,
            lowest_score: summary.lowest_score,
            recent_results,
            progress_over_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn question(text: &str, options: &[&str], correct: i32) -> Question {
        Question {
            id: Uuid::new_v4(),
            exam_id: Uuid::new_v4(),
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct,
            explanation: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_grade_answers_all_correct() {
        let questions = vec![
            question("Q1", &["a", "b"], 0),
            question("Q2", &["a", "b", "c"], 2),
        ];

        let (correct, details) = ProgressService::grade_answers(&questions, &[0, 2]);
        assert_eq!(correct, 2);
        assert!(details.iter().all(|d| d.is_correct));
    }

    #[test]
    fn test_grade_answers_partial() {
        let questions = vec![
            question("Q1", &["a", "b"], 0),
            question("Q2", &["a", "b", "c"], 2),
            question("Q3", &["a", "b"], 1),
        ];

        let (correct, details) = ProgressService::grade_answers(&questions, &[0, 1, 0]);
        assert_eq!(correct, 1);
        assert!(details[0].is_correct);
        assert!(!details[1].is_correct);
        assert!(!details[2].is_correct);

        // Details record both the given and the expected answer
        assert_eq!(details[1].user_answer, 1);
        assert_eq!(details[1].correct_answer, 2);
    }

    #[test]
    fn test_score_is_a_percentage() {
        let questions = vec![
            question("Q1", &["a", "b"], 0),
            question("Q2", &["a", "b"], 0),
            question("Q3", &["a", "b"], 0),
            question("Q4", &["a", "b"], 0),
        ];

        let (correct, _) = ProgressService::grade_answers(&questions, &[0, 0, 1, 1]);
        let score = correct as f64 / questions.len() as f64 * 100.0;
        assert_eq!(score, 50.0);
    }
}
