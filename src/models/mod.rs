//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod exam;
pub mod exam_result;
pub mod interview_question;
pub mod question;
pub mod resource;
pub mod user;

pub use exam::*;
pub use exam_result::*;
pub use interview_question::*;
pub use question::*;
pub use resource::*;
pub use user::*;
