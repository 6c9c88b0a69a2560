//! Study resource handlers

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

/// Resource routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_resources))
        .route("/", post(handler::create_resource))
        .route("/categories", get(handler::list_categories))
        .route("/tags", get(handler::list_tags))
        .route("/{id}", get(handler::get_resource))
        .route("/{id}", put(handler::update_resource))
        .route("/{id}", delete(handler::delete_resource))
}
