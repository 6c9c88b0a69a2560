//! Admin service
//!
//! Read-only statistics over users, exams and exam results. Each method
//! composes a handful of independent aggregate queries.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    constants::{roles, stats},
    db::repositories::{ExamRepository, ResultRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::admin::response::{
        CategoryAttempts, CategoryCount, DifficultyAttempts, DifficultyCount, ExamAttemptCount,
        ExamStatisticsResponse, HardestExam, MonthlyAverage, MonthlyBucket,
        OverallStatisticsResponse, RoleCount, StudentExamResult, StudentInfo,
        StudentProgressResponse, StudentProgressSummary, StudentRow, UserStatisticsResponse,
    },
    utils::time,
};

/// Admin service for statistics and student oversight
pub struct AdminService;

impl AdminService {
    /// List all users holding the student role, newest first
    pub async fn get_all_students(pool: &PgPool) -> AppResult<Vec<StudentRow>> {
        let students = sqlx::query_as::<_, StudentRow>(
            r#"
            SELECT id, name, email, created_at
            FROM users
            WHERE $1 = ANY(roles)
            ORDER BY created_at DESC
            "#,
        )
        .bind(roles::STUDENT)
        .fetch_all(pool)
        .await?;

        Ok(students)
    }

    /// Detailed progress report for one student
    ///
    /// The optional date range and sort direction apply to the listed
    /// results; the summary aggregates are always all-time.
    pub async fn get_student_progress(
        pool: &PgPool,
        user_id: &Uuid,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
        descending: bool,
    ) -> AppResult<StudentProgressResponse> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let direction = if descending { "DESC" } else { "ASC" };
        let query = format!(
            r#"
            SELECT
                r.id, r.exam_id, e.title AS exam_title, r.score,
                r.total_questions, r.correct_answers, r.completed_at
            FROM exam_results r
            JOIN exams e ON e.id = r.exam_id
            WHERE r.user_id = $1
                AND ($2::timestamptz IS NULL OR r.completed_at >= $2)
                AND ($3::timestamptz IS NULL OR r.completed_at <= $3)
            ORDER BY r.completed_at {}
            "#,
            direction
        );

        let exam_results = sqlx::query_as::<_, StudentExamResult>(&query)
            .bind(user_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_all(pool)
            .await?;

        #[derive(sqlx::FromRow)]
        struct Totals {
            total_exams_taken: i64,
            average_score: f64,
        }

        let totals = sqlx::query_as::<_, Totals>(
            r#"
            SELECT
                COUNT(*) AS total_exams_taken,
                COALESCE(AVG(score), 0)::float8 AS average_score
            FROM exam_results
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        let (progress_over_time, attempts_by_category, attempts_by_difficulty) = futures::try_join!(
            Self::progress_over_time(pool, user_id),
            Self::attempts_by_category(pool, user_id),
            Self::attempts_by_difficulty(pool, user_id),
        )?;

        Ok(StudentProgressResponse {
            user: StudentInfo {
                id: user.id,
                name: user.name,
                email: user.email,
            },
            exam_results,
            summary: StudentProgressSummary {
                total_exams_taken: totals.total_exams_taken,
                average_score: totals.average_score,
                progress_over_time,
                attempts_by_category,
                attempts_by_difficulty,
            },
        })
    }

    /// User statistics: totals, role distribution, activity, registrations
    ///
    /// `days` bounds the look-back window for the new/active user counts.
    pub async fn get_user_statistics(
        pool: &PgPool,
        days: i64,
    ) -> AppResult<UserStatisticsResponse> {
        let cutoff = time::days_ago(days);

        let total_users = UserRepository::count(pool).await?;
        let new_users_last_30_days = UserRepository::count_created_since(pool, cutoff).await?;
        let active_users = ResultRepository::count_active_users_since(pool, cutoff).await?;

        // A user holding several roles counts once per role
        let users_by_role = sqlx::query_as::<_, RoleCount>(
            r#"
            SELECT role, COUNT(*) AS count
            FROM (SELECT unnest(roles) AS role FROM users) r
            GROUP BY role
            ORDER BY count DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        // Average exams taken per user that has taken any
        let user_engagement: f64 = sqlx::query_scalar(
            r#"
            SELECT COALESCE(AVG(exam_count), 0)::float8
            FROM (SELECT COUNT(*) AS exam_count FROM exam_results GROUP BY user_id) t
            "#,
        )
        .fetch_one(pool)
        .await?;

        let user_registration_over_time = sqlx::query_as::<_, MonthlyBucket>(
            r#"
            SELECT date_trunc('month', created_at) AS date, COUNT(*) AS count
            FROM users
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(UserStatisticsResponse {
            total_users,
            users_by_role,
            new_users_last_30_days,
            active_users,
            user_engagement,
            user_registration_over_time,
        })
    }

    /// Exam statistics: totals, distributions and rankings
    pub async fn get_exam_statistics(pool: &PgPool) -> AppResult<ExamStatisticsResponse> {
        let total_exams = ExamRepository::count(pool).await?;
        let total_questions = ExamRepository::count_questions(pool).await?;

        let exams_by_category = sqlx::query_as::<_, CategoryCount>(
            r#"SELECT category, COUNT(*) AS count FROM exams GROUP BY category ORDER BY count DESC"#,
        )
        .fetch_all(pool)
        .await?;

        let exams_by_difficulty = sqlx::query_as::<_, DifficultyCount>(
            r#"SELECT difficulty, COUNT(*) AS count FROM exams GROUP BY difficulty ORDER BY count DESC"#,
        )
        .fetch_all(pool)
        .await?;

        let most_attempted_exams = sqlx::query_as::<_, ExamAttemptCount>(
            r#"
            SELECT e.id AS exam_id, e.title, COUNT(*) AS attempt_count
            FROM exam_results r
            JOIN exams e ON e.id = r.exam_id
            GROUP BY e.id, e.title
            ORDER BY attempt_count DESC
            LIMIT $1
            "#,
        )
        .bind(stats::TOP_EXAMS_LIMIT)
        .fetch_all(pool)
        .await?;

        // Lowest average score, with a floor on attempts so one bad run
        // doesn't rank an exam
        let hardest_exams = sqlx::query_as::<_, HardestExam>(
            r#"
            SELECT
                e.id AS exam_id, e.title,
                AVG(r.score)::float8 AS average_score,
                COUNT(*) AS attempt_count
            FROM exam_results r
            JOIN exams e ON e.id = r.exam_id
            GROUP BY e.id, e.title
            HAVING COUNT(*) >= $1
            ORDER BY average_score ASC
            LIMIT $2
            "#,
        )
        .bind(stats::MIN_ATTEMPTS_FOR_HARDEST)
        .bind(stats::TOP_EXAMS_LIMIT)
        .fetch_all(pool)
        .await?;

        Ok(ExamStatisticsResponse {
            total_exams,
            total_questions,
            exams_by_category,
            exams_by_difficulty,
            most_attempted_exams,
            hardest_exams,
        })
    }

    /// Overall system statistics
    pub async fn get_overall_statistics(pool: &PgPool) -> AppResult<OverallStatisticsResponse> {
        let (total_users, total_exams, total_exam_attempts, average_score) = futures::try_join!(
            UserRepository::count(pool),
            ExamRepository::count(pool),
            ResultRepository::count(pool),
            ResultRepository::average_score(pool),
        )?;

        let activity_over_time = sqlx::query_as::<_, MonthlyBucket>(
            r#"
            SELECT date_trunc('month', completed_at) AS date, COUNT(*) AS count
            FROM exam_results
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(OverallStatisticsResponse {
            total_users,
            total_exams,
            total_exam_attempts,
            average_score,
            activity_over_time,
        })
    }

    /// Monthly average-score buckets for one user
    async fn progress_over_time(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<MonthlyAverage>> {
        let buckets = sqlx::query_as::<_, MonthlyAverage>(
            r#"
            SELECT
                date_trunc('month', completed_at) AS date,
                AVG(score)::float8 AS average_score,
                COUNT(*) AS count
            FROM exam_results
            WHERE user_id = $1
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(buckets)
    }

    /// Attempt counts and average scores per exam category for one user
    async fn attempts_by_category(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<CategoryAttempts>> {
        let attempts = sqlx::query_as::<_, CategoryAttempts>(
            r#"
            SELECT e.category, COUNT(*) AS count, AVG(r.score)::float8 AS average_score
            FROM exam_results r
            JOIN exams e ON e.id = r.exam_id
            WHERE r.user_id = $1
            GROUP BY e.category
            ORDER BY count DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(attempts)
    }

    /// Attempt counts and average scores per exam difficulty for one user
    async fn attempts_by_difficulty(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<Vec<DifficultyAttempts>> {
        let attempts = sqlx::query_as::<_, DifficultyAttempts>(
            r#"
            SELECT e.difficulty, COUNT(*) AS count, AVG(r.score)::float8 AS average_score
            FROM exam_results r
            JOIN exams e ON e.id = r.exam_id
            WHERE r.user_id = $1
            GROUP BY e.difficulty
            ORDER BY count DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(attempts)
    }
}
