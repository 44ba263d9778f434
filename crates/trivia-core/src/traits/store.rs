//! Question store trait.

use crate::error::TriviaResult;
use crate::types::{CategoryId, CategoryRecord, NewQuestion, QuestionId, QuestionRecord};

/// Backing store for questions and categories.
///
/// The catalog holds one of these behind an `Arc` and never assumes anything
/// about how records are persisted. Implementations are responsible for
/// their own consistency under concurrent writers.
#[cfg_attr(test, mockall::automock)]
pub trait QuestionStore: Send + Sync {
    /// All questions, ordered by id ascending.
    fn all_questions(&self) -> TriviaResult<Vec<QuestionRecord>>;

    /// All categories.
    fn all_categories(&self) -> TriviaResult<Vec<CategoryRecord>>;

    /// Look up a single category.
    fn get_category(&self, id: CategoryId) -> TriviaResult<Option<CategoryRecord>>;

    /// Persist a question and return it with its assigned id.
    fn insert_question(&self, question: NewQuestion) -> TriviaResult<QuestionRecord>;

    /// Remove a question. Returns `false` if no such question existed.
    fn delete_question(&self, id: QuestionId) -> TriviaResult<bool>;

    /// Insert or replace a category. Used for seeding only.
    fn insert_category(&self, category: CategoryRecord) -> TriviaResult<()>;
}
