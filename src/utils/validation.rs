//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::constants;

/// Tags are lowercase slugs: letters, digits, hyphens
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]{0,63}$").expect("valid tag regex"));

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !email.contains('@') {
        return Err("Invalid email format");
    }
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format");
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    Ok(())
}

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate a set of user roles (must be non-empty, all known)
pub fn validate_roles(roles: &[String]) -> Result<(), &'static str> {
    if roles.is_empty() {
        return Err("At least one role is required");
    }
    for role in roles {
        validate_role(role)?;
    }
    Ok(())
}

/// Validate exam category
pub fn validate_exam_category(category: &str) -> Result<(), &'static str> {
    if constants::exam_categories::ALL.contains(&category) {
        Ok(())
    } else {
        Err("Invalid exam category")
    }
}

/// Validate difficulty level
pub fn validate_difficulty(difficulty: &str) -> Result<(), &'static str> {
    if constants::difficulties::ALL.contains(&difficulty) {
        Ok(())
    } else {
        Err("Invalid difficulty")
    }
}

/// Validate resource type
pub fn validate_resource_type(resource_type: &str) -> Result<(), &'static str> {
    if constants::resource_types::ALL.contains(&resource_type) {
        Ok(())
    } else {
        Err("Invalid resource type")
    }
}

/// Validate resource category
pub fn validate_resource_category(category: &str) -> Result<(), &'static str> {
    if constants::resource_categories::ALL.contains(&category) {
        Ok(())
    } else {
        Err("Invalid resource category")
    }
}

/// Validate interview question category
pub fn validate_interview_category(category: &str) -> Result<(), &'static str> {
    if constants::interview_categories::ALL.contains(&category) {
        Ok(())
    } else {
        Err("Invalid interview category")
    }
}

/// Validate a resource tag
pub fn validate_tag(tag: &str) -> Result<(), &'static str> {
    if TAG_RE.is_match(tag) {
        Ok(())
    } else {
        Err("Tags must be lowercase slugs (letters, digits, hyphens)")
    }
}

/// Validate a correct-answer index against an option list
pub fn validate_answer_index(index: i32, option_count: usize) -> Result<(), &'static str> {
    if index < 0 || index as usize >= option_count {
        return Err("Correct answer index is out of range");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize a title
pub fn validate_title(title: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(title);
    if sanitized.is_empty() {
        return Err("Title cannot be empty");
    }
    if sanitized.len() > 256 {
        return Err("Title must be at most 256 characters");
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_roles() {
        assert!(validate_roles(&["student".to_string()]).is_ok());
        assert!(validate_roles(&["student".to_string(), "admin".to_string()]).is_ok());
        assert!(validate_roles(&[]).is_err());
        assert!(validate_roles(&["pilot".to_string()]).is_err());
    }

    #[test]
    fn test_validate_vocabularies() {
        assert!(validate_exam_category("pilotTrainee").is_ok());
        assert!(validate_exam_category("cabinCrew").is_err());
        assert!(validate_difficulty("hard").is_ok());
        assert!(validate_difficulty("extreme").is_err());
        assert!(validate_resource_type("video").is_ok());
        assert!(validate_resource_type("podcast").is_err());
        assert!(validate_resource_category("meteorology").is_ok());
        assert!(validate_resource_category("astronomy").is_err());
        assert!(validate_interview_category("behavioral").is_ok());
        assert!(validate_interview_category("casual").is_err());
    }

    #[test]
    fn test_validate_tag() {
        assert!(validate_tag("navigation").is_ok());
        assert!(validate_tag("boeing-737").is_ok());
        assert!(validate_tag("Bad Tag").is_err());
        assert!(validate_tag("-leading").is_err());
    }

    #[test]
    fn test_validate_answer_index() {
        assert!(validate_answer_index(0, 4).is_ok());
        assert!(validate_answer_index(3, 4).is_ok());
        assert!(validate_answer_index(4, 4).is_err());
        assert!(validate_answer_index(-1, 4).is_err());
    }

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title("  Aviation Physics  ").unwrap(), "Aviation Physics");
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(300)).is_err());
    }
}
