//! Interview question handlers

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

/// Interview routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_interview_questions))
        .route("/", post(handler::create_interview_question))
        .route("/{id}", get(handler::get_interview_question))
        .route("/{id}", put(handler::update_interview_question))
        .route("/{id}", delete(handler::delete_interview_question))
}
