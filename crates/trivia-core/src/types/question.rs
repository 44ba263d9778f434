//! Question records and the payload used to create them.

use serde::{Deserialize, Serialize};

use super::scope::CategoryId;
use crate::error::{TriviaError, TriviaResult};

/// Identifier of a question, assigned by the store.
pub type QuestionId = i64;

/// Lowest accepted difficulty.
pub const MIN_DIFFICULTY: u8 = 1;
/// Highest accepted difficulty.
pub const MAX_DIFFICULTY: u8 = 5;

/// A stored trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Unique identifier, stable for the lifetime of the record.
    pub id: QuestionId,
    /// The question text.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// Category this question belongs to. May reference a category that no
    /// longer exists; such questions are treated as uncategorized.
    pub category: CategoryId,
    /// Difficulty in `MIN_DIFFICULTY..=MAX_DIFFICULTY`.
    pub difficulty: u8,
}

impl QuestionRecord {
    /// Attach a store-assigned id to a validated question.
    pub fn from_new(id: QuestionId, new: NewQuestion) -> Self {
        Self {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        }
    }
}

/// A validated question that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u8,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<CategoryId>,
        difficulty: u8,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
            difficulty,
        }
    }
}

/// Raw create payload as received from the boundary.
///
/// Every field is optional and loosely typed so that a missing or ill-typed
/// field surfaces as an unprocessable error instead of a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: Option<serde_json::Value>,
    #[serde(default)]
    pub answer: Option<serde_json::Value>,
    #[serde(default)]
    pub category: Option<serde_json::Value>,
    #[serde(default)]
    pub difficulty: Option<serde_json::Value>,
}

impl QuestionDraft {
    /// Convenience constructor for already-typed input.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Self {
        Self {
            question: Some(serde_json::Value::String(question.into())),
            answer: Some(serde_json::Value::String(answer.into())),
            category: Some(category.into()),
            difficulty: Some(difficulty.into()),
        }
    }

    /// Check that all four fields are present and well typed.
    pub fn validate(&self) -> TriviaResult<NewQuestion> {
        let question = required_text("question", self.question.as_ref())?;
        let answer = required_text("answer", self.answer.as_ref())?;

        let category = match self.category.as_ref() {
            None | Some(serde_json::Value::Null) => return Err(TriviaError::missing_field("category")),
            Some(value) => CategoryId::from_value(value).ok_or_else(|| {
                TriviaError::invalid_field("category", "Category must be an integer id")
            })?,
        };

        let difficulty = match self.difficulty.as_ref() {
            None | Some(serde_json::Value::Null) => {
                return Err(TriviaError::missing_field("difficulty"))
            }
            Some(value) => parse_difficulty(value)?,
        };

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn required_text(field: &str, value: Option<&serde_json::Value>) -> TriviaResult<String> {
    match value {
        None | Some(serde_json::Value::Null) => Err(TriviaError::missing_field(field)),
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(serde_json::Value::String(_)) => Err(TriviaError::invalid_field(
            field,
            format!("Field '{}' must not be blank", field),
        )),
        Some(_) => Err(TriviaError::invalid_field(
            field,
            format!("Field '{}' must be a string", field),
        )),
    }
}

fn parse_difficulty(value: &serde_json::Value) -> TriviaResult<u8> {
    let raw = match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    raw.filter(|d| (MIN_DIFFICULTY as i64..=MAX_DIFFICULTY as i64).contains(d))
        .map(|d| d as u8)
        .ok_or_else(|| {
            TriviaError::invalid_field(
                "difficulty",
                format!(
                    "Difficulty must be an integer between {} and {}",
                    MIN_DIFFICULTY, MAX_DIFFICULTY
                ),
            )
        })
}
