//! Factory for creating a catalog from configuration.

use std::sync::Arc;

use tracing::info;
use trivia_core::error::TriviaResult;
use trivia_core::{Fixture, QuestionCatalog, QuestionStore, SqliteStore, TriviaConfig};

/// Open the configured SQLite store, seed it if it is empty and a fixture is
/// configured, and wrap it in a catalog.
pub fn create_catalog(config: &TriviaConfig) -> TriviaResult<QuestionCatalog> {
    let store = SqliteStore::new(&config.database_path)?;
    info!(path = %config.database_path.display(), "Opened question store");

    if let Some(seed_path) = &config.seed_path {
        let is_empty =
            store.all_questions()?.is_empty() && store.all_categories()?.is_empty();
        if is_empty {
            Fixture::from_file(seed_path)?.load_into(&store)?;
        } else {
            info!(path = %seed_path.display(), "Store already populated, skipping fixture");
        }
    }

    let store: Arc<dyn QuestionStore> = Arc::new(store);
    Ok(QuestionCatalog::from_config(store, config))
}
