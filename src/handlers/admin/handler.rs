//! Admin handler implementations

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::{
    constants::stats,
    error::{AppError, AppResult},
    handlers::progress::request::SortDirection,
    services::AdminService,
    state::AppState,
    utils::time,
};

use super::{
    request::{StudentProgressQuery, UserStatisticsQuery},
    response::{
        ExamStatisticsResponse, OverallStatisticsResponse, StudentProgressResponse, StudentRow,
        UserStatisticsResponse,
    },
};

/// List all students with basic info
pub async fn get_all_students(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StudentRow>>> {
    let students = AdminService::get_all_students(state.db()).await?;
    Ok(Json(students))
}

/// Detailed progress of a specific student
pub async fn get_student_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<StudentProgressQuery>,
) -> AppResult<Json<StudentProgressResponse>> {
    let start_date = match query.start_date.as_deref() {
        Some(s) => Some(
            time::parse_datetime(s)
                .ok_or_else(|| AppError::Validation("Invalid startDate".to_string()))?,
        ),
        None => None,
    };
    let end_date = match query.end_date.as_deref() {
        Some(s) => Some(
            time::parse_datetime(s)
                .ok_or_else(|| AppError::Validation("Invalid endDate".to_string()))?,
        ),
        None => None,
    };
    let descending = query.sort_direction.unwrap_or(SortDirection::Desc) == SortDirection::Desc;

    let progress =
        AdminService::get_student_progress(state.db(), &id, start_date, end_date, descending)
            .await?;

    Ok(Json(progress))
}

/// User statistics
pub async fn get_user_statistics(
    State(state): State<AppState>,
    Query(query): Query<UserStatisticsQuery>,
) -> AppResult<Json<UserStatisticsResponse>> {
    let days = query.days.unwrap_or(stats::ACTIVE_WINDOW_DAYS).clamp(1, 365);

    let statistics = AdminService::get_user_statistics(state.db(), days).await?;
    Ok(Json(statistics))
}

/// Exam statistics
pub async fn get_exam_statistics(
    State(state): State<AppState>,
) -> AppResult<Json<ExamStatisticsResponse>> {
    let statistics = AdminService::get_exam_statistics(state.db()).await?;
    Ok(Json(statistics))
}

/// Overall system statistics
pub async fn get_overall_statistics(
    State(state): State<AppState>,
) -> AppResult<Json<OverallStatisticsResponse>> {
    let statistics = AdminService::get_overall_statistics(state.db()).await?;
    Ok(Json(statistics))
}
