//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod exams;
pub mod health;
pub mod interviews;
pub mod progress;
pub mod resources;
pub mod users;

use axum::{middleware, Router};

use crate::{middleware::auth::admin_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/users", users::routes())
        .nest("/exams", exams::routes())
        .nest("/progress", progress::routes())
        .nest("/resources", resources::routes())
        .nest("/interviews", interviews::routes())
        .nest(
            "/admin",
            admin::routes().route_layer(middleware::from_fn_with_state(state, admin_middleware)),
        )
}
