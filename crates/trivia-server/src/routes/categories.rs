//! Category endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use trivia_core::types::category_map;
use trivia_core::{CategoryId, QuestionRecord};

/// Response for listing categories.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<String, String>,
}

/// List all categories as an `{id: type}` map.
/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<CategoriesResponse>> {
    let categories = state.with_catalog(|catalog| catalog.list_categories()).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// Response for listing a category's questions.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionRecord>,
    pub total_questions: usize,
    pub current_category: String,
}

/// List every question in a category.
/// GET /categories/:id/questions
pub async fn category_questions(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<CategoryQuestionsResponse>> {
    let category_id: CategoryId = raw_id
        .parse()
        .map_err(|_| ApiError::not_found(format!("Invalid category id '{}'", raw_id)))?;

    let listing = state
        .with_catalog(move |catalog| catalog.list_by_category(category_id))
        .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        current_category: listing.current_category,
    }))
}
