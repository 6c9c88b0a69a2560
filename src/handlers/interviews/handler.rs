//! Interview handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{difficulties, interview_categories, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::InterviewService,
    state::AppState,
};

use super::{
    request::{
        CreateInterviewQuestionRequest, ListInterviewQuestionsQuery,
        UpdateInterviewQuestionRequest,
    },
    response::{DeletedResponse, InterviewQuestionResponse},
};

/// List interview questions with optional filters
pub async fn list_interview_questions(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Query(query): Query<ListInterviewQuestionsQuery>,
) -> AppResult<Json<Vec<InterviewQuestionResponse>>> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let skip = query.skip.unwrap_or(0).max(0);

    let questions = InterviewService::list_questions(
        state.db(),
        limit,
        skip,
        query.category.as_deref(),
        query.difficulty.as_deref(),
    )
    .await?;

    Ok(Json(
        questions
            .into_iter()
            .map(InterviewQuestionResponse::from)
            .collect(),
    ))
}

/// Create a new interview question (admin only)
pub async fn create_interview_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateInterviewQuestionRequest>,
) -> AppResult<(StatusCode, Json<InterviewQuestionResponse>)> {
    payload.validate()?;

    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can create interview questions".to_string(),
        ));
    }

    let question = InterviewService::create_question(
        state.db(),
        &payload.question,
        payload.sample_answer.as_deref(),
        payload
            .category
            .as_deref()
            .unwrap_or(interview_categories::TECHNICAL),
        payload.difficulty.as_deref().unwrap_or(difficulties::MEDIUM),
        payload.tips_for_answering.as_deref(),
        payload.year_asked,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(InterviewQuestionResponse::from(question)),
    ))
}

/// Get a specific interview question
pub async fn get_interview_question(
    State(state): State<AppState>,
    _auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<InterviewQuestionResponse>> {
    let question = InterviewService::get_question(state.db(), &id).await?;

    Ok(Json(InterviewQuestionResponse::from(question)))
}

/// Update an interview question (admin only)
pub async fn update_interview_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateInterviewQuestionRequest>,
) -> AppResult<Json<InterviewQuestionResponse>> {
    payload.validate()?;

    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can update interview questions".to_string(),
        ));
    }

    let question = InterviewService::update_question(
        state.db(),
        &id,
        payload.question.as_deref(),
        payload.sample_answer.as_deref(),
        payload.category.as_deref(),
        payload.difficulty.as_deref(),
        payload.tips_for_answering.as_deref(),
        payload.year_asked,
    )
    .await?;

    Ok(Json(InterviewQuestionResponse::from(question)))
}

/// Delete an interview question (admin only)
pub async fn delete_interview_question(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletedResponse>> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only admins can delete interview questions".to_string(),
        ));
    }

    InterviewService::delete_question(state.db(), &id).await?;

    Ok(Json(DeletedResponse { deleted: true }))
}
