//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Student roster row
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StudentRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Basic user info in the student progress report
#[derive(Debug, Serialize)]
pub struct StudentInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Exam result row in the student progress report
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct StudentExamResult {
    pub id: Uuid,
    pub exam_id: Uuid,
    pub exam_title: String,
    pub score: f64,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub completed_at: DateTime<Utc>,
}

/// Monthly count bucket
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct MonthlyBucket {
    pub date: DateTime<Utc>,
    pub count: i64,
}

/// Monthly average-score bucket
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAverage {
    pub date: DateTime<Utc>,
    pub average_score: f64,
    pub count: i64,
}

/// Attempt counts and average score per exam category
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAttempts {
    pub category: String,
    pub count: i64,
    pub average_score: f64,
}

/// Attempt counts and average score per exam difficulty
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyAttempts {
    pub difficulty: String,
    pub count: i64,
    pub average_score: f64,
}

/// Summary block of the student progress report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgressSummary {
    pub total_exams_taken: i64,
    pub average_score: f64,
    pub progress_over_time: Vec<MonthlyAverage>,
    pub attempts_by_category: Vec<CategoryAttempts>,
    pub attempts_by_difficulty: Vec<DifficultyAttempts>,
}

/// Detailed progress report for one student
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgressResponse {
    pub user: StudentInfo,
    pub exam_results: Vec<StudentExamResult>,
    pub summary: StudentProgressSummary,
}

/// Users holding a role (a user counts once per role held)
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct RoleCount {
    pub role: String,
    pub count: i64,
}

/// User statistics report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatisticsResponse {
    pub total_users: i64,
    pub users_by_role: Vec<RoleCount>,
    pub new_users_last_30_days: i64,
    pub active_users: i64,
    /// Average exams taken per user with at least one attempt
    pub user_engagement: f64,
    pub user_registration_over_time: Vec<MonthlyBucket>,
}

/// Exams per category
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Exams per difficulty
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct DifficultyCount {
    pub difficulty: String,
    pub count: i64,
}

/// Most-attempted exam ranking entry
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ExamAttemptCount {
    pub exam_id: Uuid,
    pub title: String,
    pub attempt_count: i64,
}

/// Hardest exam ranking entry (lowest average score)
#[derive(Debug, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HardestExam {
    pub exam_id: Uuid,
    pub title: String,
    pub average_score: f64,
    pub attempt_count: i64,
}

/// Exam statistics report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamStatisticsResponse {
    pub total_exams: i64,
    pub total_questions: i64,
    pub exams_by_category: Vec<CategoryCount>,
    pub exams_by_difficulty: Vec<DifficultyCount>,
    pub most_attempted_exams: Vec<ExamAttemptCount>,
    pub hardest_exams: Vec<HardestExam>,
}

/// Overall system statistics report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStatisticsResponse {
    pub total_users: i64,
    pub total_exams: i64,
    pub total_exam_attempts: i64,
    pub average_score: f64,
    pub activity_over_time: Vec<MonthlyBucket>,
}
