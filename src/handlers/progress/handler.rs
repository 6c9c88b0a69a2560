//! Progress handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::ProgressService,
    state::AppState,
};

use super::{
    request::{ProgressQuery, SortDirection, SubmitExamRequest},
    response::{ExamResultResponse, ProgressStatsResponse, ResultWithExam},
};

/// Submit answers for an exam and receive the graded result
pub async fn submit_exam_result(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(exam_id): Path<Uuid>,
    Json(payload): Json<SubmitExamRequest>,
) -> AppResult<(StatusCode, Json<ExamResultResponse>)> {
    payload.validate()?;

    let result = ProgressService::submit_exam_result(
        state.db(),
        &auth_user.id,
        &exam_id,
        &payload.answers,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ExamResultResponse::from(result))))
}

/// List the caller's exam results
pub async fn list_exam_results(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ProgressQuery>,
) -> AppResult<Json<Vec<ResultWithExam>>> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let skip = query.skip.unwrap_or(0).max(0);
    let descending = query.sort_direction.unwrap_or(SortDirection::Desc) == SortDirection::Desc;

    let results = ProgressService::list_results(
        state.db(),
        &auth_user.id,
        limit,
        skip,
        query.sort_by.as_deref(),
        descending,
    )
    .await?;

    Ok(Json(results))
}

/// List the caller's results for a specific exam
pub async fn get_exam_results(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(exam_id): Path<Uuid>,
) -> AppResult<Json<Vec<ExamResultResponse>>> {
    let results = ProgressService::results_for_exam(state.db(), &auth_user.id, &exam_id).await?;

    Ok(Json(results.into_iter().map(ExamResultResponse::from).collect()))
}

/// Get the caller's progress summary
pub async fn get_progress_stats(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ProgressStatsResponse>> {
    let stats = ProgressService::progress_stats(state.db(), &auth_user.id).await?;

    Ok(Json(stats))
}
