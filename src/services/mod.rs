//! Business logic services

pub mod admin_service;
pub mod auth_service;
pub mod exam_service;
pub mod interview_service;
pub mod progress_service;
pub mod resource_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use exam_service::ExamService;
pub use interview_service::InterviewService;
pub use progress_service::ProgressService;
pub use resource_service::ResourceService;
pub use user_service::UserService;
