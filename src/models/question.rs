//! Question model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Multiple-choice question belonging to an exam
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub exam_id: Uuid,
    pub text: String,
    pub options: Vec<String>,
    /// 0-based index into `options`
    pub correct_answer: i32,
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    /// Check whether an answer index is a valid option for this question
    pub fn is_valid_answer(&self, answer: i32) -> bool {
        answer >= 0 && (answer as usize) < self.options.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_answer() {
        let question = Question {
            id: Uuid::new_v4(),
            exam_id: Uuid::new_v4(),
            text: "What force opposes the weight of an aircraft?".to_string(),
            options: vec![
                "Gravity".to_string(),
                "Lift".to_string(),
                "Thrust".to_string(),
                "Drag".to_string(),
            ],
            correct_answer: 1,
            explanation: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(question.is_valid_answer(0));
        assert!(question.is_valid_answer(3));
        assert!(!question.is_valid_answer(4));
        assert!(!question.is_valid_answer(-1));
    }
}
