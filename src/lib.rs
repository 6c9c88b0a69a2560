//! PilotPrep - Pilot Exam Preparation Backend
//!
//! This library provides the core functionality for the PilotPrep platform,
//! a REST backend serving pilot trainees preparing for airline entrance
//! exams and interviews.
//!
//! # Features
//!
//! - JWT authentication with role-based access (student / admin)
//! - Mock exams with multiple-choice questions
//! - Server-side grading and per-user progress tracking
//! - Study resource library and interview question bank
//! - Admin statistics over users, exams and attempts
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
