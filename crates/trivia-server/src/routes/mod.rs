//! Route definitions for the REST API.

mod categories;
mod health;
mod questions;
mod quizzes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Categories
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(categories::category_questions),
        )
        // Questions
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search_questions))
        .route(
            "/questions/:id",
            get(questions::get_question).delete(questions::delete_question),
        )
        // Quiz play
        .route("/quizzes", post(quizzes::next_quiz_question))
        .fallback(|| async { ApiError::not_found("No such route") })
        // Attach state
        .with_state(state)
}

pub use categories::*;
pub use health::*;
pub use questions::*;
pub use quizzes::*;
