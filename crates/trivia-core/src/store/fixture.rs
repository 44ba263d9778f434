//! JSON fixtures for seeding a store.
//!
//! A fixture looks like:
//!
//! ```json
//! {
//!   "categories": [{"id": 1, "type": "Science"}],
//!   "questions": [
//!     {"question": "What is H2O?", "answer": "Water", "category": 1, "difficulty": 1}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{TriviaError, TriviaResult};
use crate::traits::QuestionStore;
use crate::types::{CategoryId, CategoryRecord, NewQuestion, QuestionDraft};

/// Categories and questions to load into a fresh store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub categories: Vec<CategoryRecord>,
    pub questions: Vec<QuestionDraft>,
}

/// Counts of what a fixture load inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedStats {
    pub categories: usize,
    pub questions: usize,
}

impl Fixture {
    /// Read a fixture from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> TriviaResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Insert every category and question into `store`.
    ///
    /// Categories and questions are validated first; a single invalid entry
    /// aborts the load before anything is written. Category id 0 is reserved
    /// for "all categories" and cannot be seeded.
    pub fn load_into(&self, store: &dyn QuestionStore) -> TriviaResult<SeedStats> {
        if let Some(reserved) = self.categories.iter().find(|c| c.id.is_all()) {
            return Err(TriviaError::invalid_field(
                "id",
                format!(
                    "Category '{}' uses the reserved id {}",
                    reserved.kind,
                    CategoryId::ALL
                ),
            ));
        }

        let questions: Vec<NewQuestion> = self
            .questions
            .iter()
            .map(QuestionDraft::validate)
            .collect::<TriviaResult<_>>()?;

        for category in &self.categories {
            store.insert_category(category.clone())?;
        }
        for question in questions {
            store.insert_question(question)?;
        }

        let stats = SeedStats {
            categories: self.categories.len(),
            questions: self.questions.len(),
        };
        info!(
            categories = stats.categories,
            questions = stats.questions,
            "Loaded fixture"
        );
        Ok(stats)
    }
}
