//! Server state management.

use std::sync::Arc;

use trivia_core::error::{TriviaError, TriviaResult};
use trivia_core::QuestionCatalog;

use crate::error::{ApiError, ApiResult};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<QuestionCatalog>,
}

impl AppState {
    /// Create application state around a catalog.
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Run a catalog operation off the async executor.
    ///
    /// Store calls are synchronous (SQLite), so they go through the blocking pool.
    pub async fn with_catalog<F, T>(&self, f: F) -> ApiResult<T>
    where
        F: FnOnce(&QuestionCatalog) -> TriviaResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let catalog = Arc::clone(&self.catalog);
        tokio::task::spawn_blocking(move || f(catalog.as_ref()))
            .await
            .map_err(|e| ApiError::from(TriviaError::Internal(format!("Task failed: {}", e))))?
            .map_err(ApiError::from)
    }
}
