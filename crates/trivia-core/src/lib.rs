//! trivia-core - Core library for trivia.
//!
//! This crate provides the data model, the question selection and filtering
//! engine, the store trait with SQLite and in-memory implementations, and the
//! [`QuestionCatalog`] facade that ties them together.
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use std::sync::Arc;
//! use trivia_core::{CategoryRecord, CategoryScope, InMemoryStore, QuestionCatalog, QuestionDraft};
//!
//! let store = InMemoryStore::with_categories([CategoryRecord::new(1, "Science")]);
//! let catalog = QuestionCatalog::new(Arc::new(store)).with_seed(7);
//!
//! catalog.create(&QuestionDraft::new("What is H2O?", "Water", 1, 1))?;
//!
//! let page = catalog.list_questions(1)?;
//! assert_eq!(page.total_questions, 1);
//!
//! let asked = HashSet::new();
//! let draw = catalog.quiz_next(Some(CategoryScope::All), Some(&asked))?;
//! assert!(!draw.is_exhausted());
//! # Ok::<(), trivia_core::TriviaError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod store;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use catalog::{CategoryListing, CreatedQuestion, QuestionCatalog, QuestionPage, SearchResults};
pub use config::TriviaConfig;
pub use engine::{QuizDraw, DEFAULT_PAGE_SIZE};
pub use error::{ErrorCode, TriviaError, TriviaResult};
pub use store::{Fixture, InMemoryStore, SeedStats, SqliteStore};
pub use traits::QuestionStore;
pub use types::{
    CategoryId, CategoryRecord, CategoryScope, NewQuestion, QuestionDraft, QuestionId,
    QuestionRecord,
};
