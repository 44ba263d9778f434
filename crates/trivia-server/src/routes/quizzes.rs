//! Quiz play endpoint.

use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use trivia_core::error::{ErrorCode, TriviaError};
use trivia_core::{CategoryId, CategoryScope, QuestionId, QuestionRecord};

/// The category a quiz is played in. `id` 0 means all categories.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: CategoryId,
}

/// Request body for drawing a quiz question.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<QuestionId>>,
    pub quiz_category: Option<QuizCategory>,
}

/// Response for drawing a quiz question. `question` is null once every
/// question in the category has been asked.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionRecord>,
}

/// Draw the next quiz question.
/// POST /quizzes
pub async fn next_quiz_question(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> ApiResult<Json<QuizResponse>> {
    let Json(request) = body.map_err(|e| {
        ApiError::from(TriviaError::invalid_request(
            ErrorCode::MalformedRequest,
            e.body_text(),
        ))
    })?;

    let scope = request.quiz_category.map(|c| CategoryScope::from(c.id));
    let asked: Option<HashSet<QuestionId>> =
        request.previous_questions.map(|ids| ids.into_iter().collect());

    let draw = state
        .with_catalog(move |catalog| catalog.quiz_next(scope, asked.as_ref()))
        .await?;

    Ok(Json(QuizResponse {
        success: true,
        question: draw.into_question(),
    }))
}
