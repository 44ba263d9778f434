//! Question selection and filtering engine.
//!
//! Everything here is pure: functions take a snapshot of records and return
//! a new sequence or a draw, never touching a store.

pub mod filter;
pub mod pagination;
pub mod quiz;

pub use filter::{by_category, search};
pub use pagination::{page_count, paginate, parse_page, DEFAULT_PAGE_SIZE};
pub use quiz::{next_question, next_question_with_rng, QuizDraw};

use crate::types::{CategoryId, QuestionId, QuestionRecord};

/// Accessors the engine needs from a question-like record.
pub trait QuestionFields {
    fn id(&self) -> QuestionId;
    fn text(&self) -> &str;
    fn category(&self) -> CategoryId;
}

impl QuestionFields for QuestionRecord {
    fn id(&self) -> QuestionId {
        self.id
    }

    fn text(&self) -> &str {
        &self.question
    }

    fn category(&self) -> CategoryId {
        self.category
    }
}
