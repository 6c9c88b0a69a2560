//! Admin statistics handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// Admin routes (admin role enforced by a route-layer middleware)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(handler::get_all_students))
        .route("/students/{id}/progress", get(handler::get_student_progress))
        .route("/statistics/users", get(handler::get_user_statistics))
        .route("/statistics/exams", get(handler::get_exam_statistics))
        .route("/statistics/overall", get(handler::get_overall_statistics))
}
