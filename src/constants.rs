//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Default refresh token expiry in days
pub const DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Minimum display name length
pub const MIN_NAME_LENGTH: u64 = 1;

/// Maximum display name length
pub const MAX_NAME_LENGTH: u64 = 100;

/// Length of generated refresh tokens
pub const REFRESH_TOKEN_LENGTH: usize = 64;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const STUDENT: &str = "student";
    pub const ADMIN: &str = "admin";

    /// All user roles
    pub const ALL: &[&str] = &[STUDENT, ADMIN];
}

// =============================================================================
// EXAM VOCABULARY
// =============================================================================

/// Exam category identifiers
pub mod exam_categories {
    pub const PILOT_TRAINEE: &str = "pilotTrainee";
    pub const FLIGHT_INSTRUCTOR: &str = "flightInstructor";

    /// All exam categories
    pub const ALL: &[&str] = &[PILOT_TRAINEE, FLIGHT_INSTRUCTOR];
}

/// Difficulty levels (shared by exams and interview questions)
pub mod difficulties {
    pub const EASY: &str = "easy";
    pub const MEDIUM: &str = "medium";
    pub const HARD: &str = "hard";

    /// All difficulty levels
    pub const ALL: &[&str] = &[EASY, MEDIUM, HARD];
}

/// Minimum number of answer options per question
pub const MIN_QUESTION_OPTIONS: u64 = 2;

/// Maximum exam/resource title length
pub const MAX_TITLE_LENGTH: u64 = 256;

// =============================================================================
// RESOURCE VOCABULARY
// =============================================================================

/// Resource type identifiers
pub mod resource_types {
    pub const VIDEO: &str = "video";
    pub const DOCUMENT: &str = "document";
    pub const AUDIO: &str = "audio";
    pub const LINK: &str = "link";
    pub const IMAGE: &str = "image";

    /// All resource types
    pub const ALL: &[&str] = &[VIDEO, DOCUMENT, AUDIO, LINK, IMAGE];
}

/// Resource category identifiers
pub mod resource_categories {
    pub const FLIGHT_THEORY: &str = "flightTheory";
    pub const AIRCRAFT_SYSTEMS: &str = "aircraftSystems";
    pub const NAVIGATION: &str = "navigation";
    pub const METEOROLOGY: &str = "meteorology";
    pub const REGULATIONS: &str = "regulations";
    pub const HUMAN_FACTORS: &str = "humanFactors";
    pub const ETHIOPIAN_AIRLINES: &str = "ethiopianAirlines";
    pub const INTERVIEW_PREP: &str = "interviewPrep";

    /// All resource categories
    pub const ALL: &[&str] = &[
        FLIGHT_THEORY,
        AIRCRAFT_SYSTEMS,
        NAVIGATION,
        METEOROLOGY,
        REGULATIONS,
        HUMAN_FACTORS,
        ETHIOPIAN_AIRLINES,
        INTERVIEW_PREP,
    ];
}

// =============================================================================
// INTERVIEW VOCABULARY
// =============================================================================

/// Interview question category identifiers
pub mod interview_categories {
    pub const TECHNICAL: &str = "technical";
    pub const BEHAVIORAL: &str = "behavioral";
    pub const SITUATIONAL: &str = "situational";
    pub const PILOT_SPECIFIC: &str = "pilotSpecific";
    pub const FLIGHT_INSTRUCTOR: &str = "flightInstructor";

    /// All interview categories
    pub const ALL: &[&str] = &[
        TECHNICAL,
        BEHAVIORAL,
        SITUATIONAL,
        PILOT_SPECIFIC,
        FLIGHT_INSTRUCTOR,
    ];
}

/// Earliest accepted value for `yearAsked` on interview questions
pub const MIN_YEAR_ASKED: i32 = 2000;

// =============================================================================
// STATISTICS WINDOWS
// =============================================================================

/// Statistics windows and limits
pub mod stats {
    /// Window for "new users" and "active users" counts, in days
    pub const ACTIVE_WINDOW_DAYS: i64 = 30;

    /// Window for per-user progress-over-time buckets, in months
    pub const PROGRESS_WINDOW_MONTHS: i32 = 6;

    /// Number of recent results returned in the per-user summary
    pub const RECENT_RESULTS_LIMIT: i64 = 5;

    /// Number of exams in the most-attempted / hardest rankings
    pub const TOP_EXAMS_LIMIT: i64 = 5;

    /// Minimum attempts before an exam qualifies for the hardest ranking
    pub const MIN_ATTEMPTS_FOR_HARDEST: i64 = 5;
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// RATE LIMITING
// =============================================================================

/// Rate limiting configuration
pub mod rate_limits {
    /// Auth endpoint - max requests
    pub const AUTH_MAX_REQUESTS: i64 = 5;
    /// Auth endpoint - window in seconds
    pub const AUTH_WINDOW_SECS: i64 = 60;

    /// Exam submission endpoint - max requests
    pub const SUBMIT_MAX_REQUESTS: i64 = 10;
    /// Exam submission endpoint - window in seconds
    pub const SUBMIT_WINDOW_SECS: i64 = 60;

    /// General API - max requests
    pub const GENERAL_MAX_REQUESTS: i64 = 100;
    /// General API - window in seconds
    pub const GENERAL_WINDOW_SECS: i64 = 60;
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for limit/skip listings
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size for limit/skip listings
pub const MAX_PAGE_SIZE: i64 = 100;
