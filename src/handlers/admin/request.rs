//! Admin request DTOs

use serde::Deserialize;

use crate::handlers::progress::request::SortDirection;

/// Query parameters for the student progress report
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgressQuery {
    /// ISO 8601 lower bound for the listed exam results
    pub start_date: Option<String>,

    /// ISO 8601 upper bound for the listed exam results
    pub end_date: Option<String>,

    pub sort_direction: Option<SortDirection>,
}

/// Query parameters for the user statistics report
#[derive(Debug, Deserialize)]
pub struct UserStatisticsQuery {
    /// Look-back window in days for new/active user counts (default 30)
    pub days: Option<i64>,
}
