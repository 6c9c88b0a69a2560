//! Database repositories
//!
//! Repositories handle all direct database interactions.

pub mod exam_repo;
pub mod interview_repo;
pub mod resource_repo;
pub mod result_repo;
pub mod user_repo;

pub use exam_repo::ExamRepository;
pub use interview_repo::InterviewRepository;
pub use resource_repo::ResourceRepository;
pub use result_repo::ResultRepository;
pub use user_repo::UserRepository;
