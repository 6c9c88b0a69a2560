//! Progress tracking handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Progress routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/exams/{exam_id}/submit", post(handler::submit_exam_result))
        .route("/exams", get(handler::list_exam_results))
        .route("/exams/{exam_id}", get(handler::get_exam_results))
        .route("/stats", get(handler::get_progress_stats))
}
