//! Question listing, creation, deletion and search endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use trivia_core::engine::parse_page;
use trivia_core::error::{ErrorCode, TriviaError};
use trivia_core::{QuestionDraft, QuestionId, QuestionRecord};

/// Query parameters for listing questions.
#[derive(Debug, Deserialize)]
pub struct ListQuestionsQuery {
    /// Kept as a string so a malformed page falls back to page 1.
    pub page: Option<String>,
}

/// Response for listing questions.
#[derive(Debug, Serialize)]
pub struct ListQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionRecord>,
    pub total_questions: usize,
    pub categories: BTreeMap<String, String>,
    pub current_category: Option<String>,
}

/// List one page of questions. A query string that does not parse at all
/// (e.g. a repeated `page`) falls back to page 1 like a bad page value.
/// GET /questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    query: Result<Query<ListQuestionsQuery>, QueryRejection>,
) -> ApiResult<Json<ListQuestionsResponse>> {
    let raw_page = match query {
        Ok(Query(query)) => query.page,
        Err(_) => None,
    };
    let page = parse_page(raw_page.as_deref());
    let listing = state
        .with_catalog(move |catalog| catalog.list_questions(page))
        .await?;

    Ok(Json(ListQuestionsResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        categories: listing.categories,
        current_category: listing.current_category,
    }))
}

/// Response for fetching a single question.
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub success: bool,
    pub question: QuestionRecord,
}

/// Get a question by id.
/// GET /questions/:id
pub async fn get_question(
    State(state): State<AppState>,
    path: Result<Path<QuestionId>, PathRejection>,
) -> ApiResult<Json<QuestionResponse>> {
    let Path(id) = path.map_err(|e| ApiError::not_found(e.body_text()))?;
    let question = state.with_catalog(move |catalog| catalog.get_question(id)).await?;

    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}

/// Response for creating a question.
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub created: QuestionId,
    pub total_questions: usize,
}

/// Create a question.
/// POST /questions
pub async fn create_question(
    State(state): State<AppState>,
    body: Result<Json<QuestionDraft>, JsonRejection>,
) -> ApiResult<Json<CreateQuestionResponse>> {
    let Json(draft) = body.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let created = state.with_catalog(move |catalog| catalog.create(&draft)).await?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        created: created.question.id,
        total_questions: created.total_questions,
    }))
}

/// Response for deleting a question.
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted: QuestionId,
    pub total_questions: usize,
}

/// Delete a question.
/// DELETE /questions/:id
pub async fn delete_question(
    State(state): State<AppState>,
    path: Result<Path<QuestionId>, PathRejection>,
) -> ApiResult<Json<DeleteQuestionResponse>> {
    let Path(id) = path.map_err(|e| ApiError::not_found(e.body_text()))?;
    let total_questions = state.with_catalog(move |catalog| catalog.delete(id)).await?;

    Ok(Json(DeleteQuestionResponse {
        success: true,
        deleted: id,
        total_questions,
    }))
}

/// Request body for searching questions.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Response for searching questions.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionRecord>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

/// Search questions by substring.
/// POST /questions/search
pub async fn search_questions(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Json(request) = body.map_err(|e| {
        ApiError::from(TriviaError::invalid_request(
            ErrorCode::MalformedRequest,
            e.body_text(),
        ))
    })?;
    let term = request.search_term.ok_or_else(|| {
        ApiError::from(TriviaError::invalid_request(
            ErrorCode::MissingSearchTerm,
            "searchTerm is required",
        ))
    })?;

    let results = state.with_catalog(move |catalog| catalog.search(&term)).await?;

    Ok(Json(SearchResponse {
        success: true,
        questions: results.questions,
        total_questions: results.total_questions,
        current_category: None,
    }))
}
