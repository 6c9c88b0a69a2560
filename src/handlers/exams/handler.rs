//! Exam handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{difficulties, exam_categories, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::ExamService,
    state::AppState,
};

use super::{
    request::{CreateExamRequest, CreateQuestionRequest, ListExamsQuery, UpdateExamRequest, UpdateQuestionRequest},
    response::{DeletedResponse, ExamResponse, QuestionResponse},
};

/// List exams with optional filters
pub async fn list_exams(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListExamsQuery>,
) -> AppResult<Json<Vec<ExamResponse>>> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let skip = query.skip.unwrap_or(0).max(0);

    let exams = ExamService::list_exams(
        state.db(),
        limit,
        skip,
        query.category.as_deref(),
        query.difficulty.as_deref(),
    )
    .await?;

    Ok(Json(exams.into_iter().map(ExamResponse::from).collect()))
}

/// Create a new exam (admin only)
pub async fn create_exam(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateExamRequest>,
) -> AppResult<(StatusCode, Json<ExamResponse>)> {
    payload.validate()?;

    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Only admins can create exams".to_string()));
    }

    let exam = ExamService::create_exam(
        state.db(),
        &payload.title,
        payload.description.as_deref(),
        payload
            .category
            .as_deref()
            .unwrap_or(exam_categories::PILOT_TRAINEE),
        payload.difficulty.as_deref().unwrap_or(difficulties::MEDIUM),
        payload.duration_minutes.unwrap_or(0),
        payload.is_active.unwrap_or(true),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(ExamResponse::from(exam))))
}

/// Get a specific exam
pub async fn get_exam(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ExamResponse>> {
    let exam = ExamService::get_exam(state.db(), &id).await?;
    Ok(Json(ExamResponse::from(exam)))
}

/// Update an exam (admin only)
pub async fn update_exam(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateExamRequest>,
) -> AppResult<Json<ExamResponse>> {
    payload.validate()?;

    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Only admins can update exams".to_string()));
    }

    let exam = ExamService::update_exam(
        state.db(),
        &id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        payload.category.as_deref(),
        payload.difficulty.as_deref(),
        payload.duration_minutes,
        payload.is_active,
    )
    .await?;

    Ok(Json(ExamResponse::from(exam)))
}

/// Delete an exam and its questions (admin only)
pub async fn delete_exam(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletedResponse>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Only admins can delete exams".to_string()));
    }

    ExamService::delete_exam(state.db(), &id).await?;

    Ok(Json(DeletedResponse { deleted: true }))
}

/// List all questions for an exam
pub async fn list_questions(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(exam_id): Path<Uuid>,
) -> AppResult<Json<Vec<QuestionResponse>>> {
    let questions = ExamService::list_questions(state.db(), &exam_id).await?;

    Ok(Json(questions.into_iter().map(QuestionResponse::from).collect()))
}

/// Add a question to an exam (admin only)
pub async fn add_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(exam_id): Path<Uuid>,
    Json(payload): Json<CreateQuestionRequest>,
) -> AppResult<(StatusCode, Json<QuestionResponse>)> {
    payload.validate()?;

    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Only admins can add questions".to_string()));
    }

    let question = ExamService::add_question(
        state.db(),
        &exam_id,
        &payload.text,
        &payload.options,
        payload.correct_answer,
        payload.explanation.as_deref(),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(QuestionResponse::from(question))))
}

/// Get a question by ID
pub async fn get_question(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path((exam_id, question_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<QuestionResponse>> {
    let question = ExamService::get_question(state.db(), &exam_id, &question_id).await?;

    Ok(Json(QuestionResponse::from(question)))
}

/// Update a question (admin only)
pub async fn update_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((exam_id, question_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateQuestionRequest>,
) -> AppResult<Json<QuestionResponse>> {
    payload.validate()?;

    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Only admins can update questions".to_string()));
    }

    let question = ExamService::update_question(
        state.db(),
        &exam_id,
        &question_id,
        payload.text.as_deref(),
        payload.options.as_deref(),
        payload.correct_answer,
        payload.explanation.as_deref(),
    )
    .await?;

    Ok(Json(QuestionResponse::from(question)))
}

/// Delete a question (admin only)
pub async fn delete_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((exam_id, question_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<DeletedResponse>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden("Only admins can delete questions".to_string()));
    }

    ExamService::delete_question(state.db(), &exam_id, &question_id).await?;

    Ok(Json(DeletedResponse { deleted: true }))
}
