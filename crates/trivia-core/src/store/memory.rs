//! In-memory question store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{TriviaError, TriviaResult};
use crate::traits::QuestionStore;
use crate::types::{CategoryId, CategoryRecord, NewQuestion, QuestionId, QuestionRecord};

#[derive(Default)]
struct Inner {
    questions: BTreeMap<QuestionId, QuestionRecord>,
    categories: BTreeMap<CategoryId, CategoryRecord>,
    last_id: QuestionId,
}

/// Process-local store. Ids come from a counter that only grows, so a
/// deleted id is never handed out again.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with categories.
    pub fn with_categories(categories: impl IntoIterator<Item = CategoryRecord>) -> Self {
        let inner = Inner {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            ..Default::default()
        };
        Self {
            inner: RwLock::new(inner),
        }
    }

    fn read(&self) -> TriviaResult<std::sync::RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| TriviaError::store("In-memory store lock poisoned"))
    }

    fn write(&self) -> TriviaResult<std::sync::RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| TriviaError::store("In-memory store lock poisoned"))
    }
}

impl QuestionStore for InMemoryStore {
    fn all_questions(&self) -> TriviaResult<Vec<QuestionRecord>> {
        Ok(self.read()?.questions.values().cloned().collect())
    }

    fn all_categories(&self) -> TriviaResult<Vec<CategoryRecord>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    fn get_category(&self, id: CategoryId) -> TriviaResult<Option<CategoryRecord>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    fn insert_question(&self, question: NewQuestion) -> TriviaResult<QuestionRecord> {
        let mut inner = self.write()?;
        inner.last_id += 1;
        let record = QuestionRecord::from_new(inner.last_id, question);
        inner.questions.insert(record.id, record.clone());
        Ok(record)
    }

    fn delete_question(&self, id: QuestionId) -> TriviaResult<bool> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }

    fn insert_category(&self, category: CategoryRecord) -> TriviaResult<()> {
        self.write()?.categories.insert(category.id, category);
        Ok(())
    }
}
