//! Question catalog: the engine wired to a store.
//!
//! The catalog fetches a snapshot from its store, runs the pure engine
//! functions over it and reports results as typed values. Store failures on
//! reads propagate as `TriviaError::Store`; failures on create/delete become
//! `TriviaError::Unprocessable`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

use crate::config::TriviaConfig;
use crate::engine::{self, QuizDraw, DEFAULT_PAGE_SIZE};
use crate::error::{ErrorCode, TriviaError, TriviaResult};
use crate::traits::QuestionStore;
use crate::types::{
    category_map, CategoryId, CategoryRecord, CategoryScope, QuestionDraft, QuestionId,
    QuestionRecord,
};

/// One page of the full question listing.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionPage {
    pub questions: Vec<QuestionRecord>,
    /// Size of the whole catalog, not of this page.
    pub total_questions: usize,
    pub categories: BTreeMap<String, String>,
    pub current_category: Option<String>,
}

/// Every question of one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub questions: Vec<QuestionRecord>,
    pub total_questions: usize,
    pub current_category: String,
}

/// Questions matching a search term.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub questions: Vec<QuestionRecord>,
    /// Number of matches.
    pub total_questions: usize,
}

/// A freshly created question and the new catalog size.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedQuestion {
    pub question: QuestionRecord,
    pub total_questions: usize,
}

/// Facade over a [`QuestionStore`].
pub struct QuestionCatalog {
    store: Arc<dyn QuestionStore>,
    page_size: usize,
    rng: Mutex<StdRng>,
}

impl QuestionCatalog {
    /// Create a catalog with the default page size and an entropy-seeded RNG.
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self {
            store,
            page_size: DEFAULT_PAGE_SIZE,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a catalog using the page size from `config`.
    pub fn from_config(store: Arc<dyn QuestionStore>, config: &TriviaConfig) -> Self {
        Self::new(store).with_page_size(config.page_size)
    }

    /// Set the page size. Zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Use a fixed seed so quiz draws are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Configured page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<dyn QuestionStore> {
        &self.store
    }

    fn sorted_questions(&self) -> TriviaResult<Vec<QuestionRecord>> {
        let mut questions = self.store.all_questions()?;
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    fn sorted_categories(&self) -> TriviaResult<Vec<CategoryRecord>> {
        let mut categories = self.store.all_categories()?;
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    /// Total number of questions in the store.
    pub fn total_questions(&self) -> TriviaResult<usize> {
        Ok(self.store.all_questions()?.len())
    }

    /// One page of all questions, ordered by id.
    pub fn list_questions(&self, page: usize) -> TriviaResult<QuestionPage> {
        let questions = self.sorted_questions()?;
        let current = engine::paginate(&questions, page, self.page_size);

        if current.is_empty() {
            return Err(TriviaError::page_not_found(page));
        }

        let categories = self.sorted_categories()?;
        debug!(page, returned = current.len(), total = questions.len(), "Listed questions");

        Ok(QuestionPage {
            questions: current.to_vec(),
            total_questions: questions.len(),
            categories: category_map(&categories),
            current_category: None,
        })
    }

    /// All categories, ordered by id.
    pub fn list_categories(&self) -> TriviaResult<Vec<CategoryRecord>> {
        let categories = self.sorted_categories()?;
        if categories.is_empty() {
            return Err(TriviaError::not_found(
                ErrorCode::NoCategories,
                "No categories available",
            ));
        }
        Ok(categories)
    }

    /// Every question in `category_id`. The category must exist.
    pub fn list_by_category(&self, category_id: CategoryId) -> TriviaResult<CategoryListing> {
        let category = self
            .store
            .get_category(category_id)?
            .ok_or_else(|| TriviaError::category_not_found(category_id))?;

        let questions = self.sorted_questions()?;
        let matches = engine::by_category(&questions, CategoryScope::Only(category.id));
        debug!(category = %category.id, matches = matches.len(), "Listed category");

        Ok(CategoryListing {
            questions: matches,
            total_questions: questions.len(),
            current_category: category.kind,
        })
    }

    /// Questions whose text contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> TriviaResult<SearchResults> {
        let questions = self.sorted_questions()?;
        let matches = engine::search(&questions, term);
        debug!(term, matches = matches.len(), "Searched questions");

        Ok(SearchResults {
            total_questions: matches.len(),
            questions: matches,
        })
    }

    /// A single question by id.
    pub fn get_question(&self, id: QuestionId) -> TriviaResult<QuestionRecord> {
        self.store
            .all_questions()?
            .into_iter()
            .find(|q| q.id == id)
            .ok_or_else(|| TriviaError::question_not_found(id))
    }

    /// Delete a question and return the remaining total.
    ///
    /// The total is counted before the store is touched, so once the
    /// deletion has gone through nothing else can fail.
    pub fn delete(&self, id: QuestionId) -> TriviaResult<usize> {
        let before = self.total_questions()?;

        match self.store.delete_question(id) {
            Ok(true) => {}
            Ok(false) => {
                return Err(TriviaError::unprocessable(
                    ErrorCode::DeleteFailed,
                    format!("Question with id '{}' does not exist", id),
                ))
            }
            Err(e) => {
                warn!(id, error = %e, "Store failed to delete question");
                return Err(TriviaError::unprocessable(
                    ErrorCode::DeleteFailed,
                    format!("Could not delete question '{}': {}", id, e),
                ));
            }
        }

        let total = before.saturating_sub(1);
        debug!(id, total, "Deleted question");
        Ok(total)
    }

    /// Validate and persist a new question.
    pub fn create(&self, draft: &QuestionDraft) -> TriviaResult<CreatedQuestion> {
        let new = draft.validate()?;
        let before = self.total_questions()?;

        let question = self.store.insert_question(new).map_err(|e| {
            warn!(error = %e, "Store failed to insert question");
            TriviaError::unprocessable(
                ErrorCode::InsertFailed,
                format!("Could not create question: {}", e),
            )
        })?;

        let total_questions = before + 1;
        debug!(id = question.id, total = total_questions, "Created question");

        Ok(CreatedQuestion {
            question,
            total_questions,
        })
    }

    /// Draw the next unseen quiz question in `scope`.
    ///
    /// Both the scope and the asked set are required; an empty asked set
    /// is valid and distinct from a missing one.
    pub fn quiz_next(
        &self,
        scope: Option<CategoryScope>,
        asked: Option<&HashSet<QuestionId>>,
    ) -> TriviaResult<QuizDraw<QuestionRecord>> {
        let scope = scope.ok_or_else(|| {
            TriviaError::invalid_request(ErrorCode::MissingScope, "Quiz category is required")
        })?;
        let asked = asked.ok_or_else(|| {
            TriviaError::invalid_request(
                ErrorCode::MissingPreviousQuestions,
                "Previous questions are required",
            )
        })?;

        let questions = self.sorted_questions()?;
        let pool = engine::by_category(&questions, scope);

        let draw = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| TriviaError::Internal("Quiz RNG lock poisoned".to_string()))?;
            engine::next_question_with_rng(&mut *rng, &pool, asked)
        };

        match &draw {
            QuizDraw::Question(q) => debug!(?scope, asked = asked.len(), id = q.id, "Drew quiz question"),
            QuizDraw::Exhausted => debug!(?scope, asked = asked.len(), "Quiz exhausted"),
        }

        Ok(draw)
    }
}
