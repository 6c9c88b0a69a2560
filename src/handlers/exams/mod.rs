//! Exam management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

/// Exam routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_exams))
        .route("/", post(handler::create_exam))
        .route("/{id}", get(handler::get_exam))
        .route("/{id}", put(handler::update_exam))
        .route("/{id}", delete(handler::delete_exam))
        // Questions
        .route("/{exam_id}/questions", get(handler::list_questions))
        .route("/{exam_id}/questions", post(handler::add_question))
        .route("/{exam_id}/questions/{question_id}", get(handler::get_question))
        .route("/{exam_id}/questions/{question_id}", put(handler::update_question))
        .route("/{exam_id}/questions/{question_id}", delete(handler::delete_question))
}
