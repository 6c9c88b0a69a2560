//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::roles;

/// User database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// A user may hold several roles at once (e.g. student and admin)
    pub roles: Vec<String>,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.roles.iter().any(|r| r == roles::ADMIN)
    }

    /// Check if user is enrolled as a student
    pub fn is_student(&self) -> bool {
        self.roles.iter().any(|r| r == roles::STUDENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_roles(roles: &[&str]) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Abebe Bikila".to_string(),
            email: "abebe@example.com".to_string(),
            password_hash: "hash".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_checks() {
        assert!(user_with_roles(&["student"]).is_student());
        assert!(!user_with_roles(&["student"]).is_admin());
        assert!(user_with_roles(&["admin"]).is_admin());
        assert!(user_with_roles(&["student", "admin"]).is_admin());
        assert!(user_with_roles(&["student", "admin"]).is_student());
    }
}
