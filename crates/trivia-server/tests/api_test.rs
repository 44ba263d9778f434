//! Integration tests for the REST API.
//!
//! Each test builds the full router over an in-memory catalog and drives it
//! with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use trivia_core::{CategoryRecord, InMemoryStore, NewQuestion, QuestionCatalog, QuestionStore};
use trivia_server::{create_server, AppState};

/// 15 questions spread over three categories, ids 1..=15.
fn app() -> Router {
    let store = InMemoryStore::with_categories([
        CategoryRecord::new(1, "Science"),
        CategoryRecord::new(2, "Art"),
        CategoryRecord::new(3, "Geography"),
    ]);
    for i in 1..=15i64 {
        let category = (i - 1) % 3 + 1;
        store
            .insert_question(NewQuestion::new(
                format!("Trivia question {}", i),
                format!("Answer {}", i),
                category,
                1,
            ))
            .unwrap();
    }
    let catalog = QuestionCatalog::new(Arc::new(store)).with_seed(42);
    create_server(AppState::new(catalog))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_get_categories() {
    let (status, body) = send(app(), Method::GET, "/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["3"], "Geography");
}

#[tokio::test]
async fn test_get_questions_first_page() {
    let (status, body) = send(app(), Method::GET, "/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 15);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(body["questions"][0]["id"], 1);
    assert_eq!(body["categories"]["2"], "Art");
    assert!(body["current_category"].is_null());
}

#[tokio::test]
async fn test_get_questions_second_page_and_bad_page_param() {
    let (_, body) = send(app(), Method::GET, "/questions?page=2", None).await;
    assert_eq!(body["questions"].as_array().unwrap().len(), 5);
    assert_eq!(body["questions"][0]["id"], 11);

    let (status, body) = send(app(), Method::GET, "/questions?page=abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"][0]["id"], 1);
}

#[tokio::test]
async fn test_404_beyond_valid_page() {
    let (status, body) = send(app(), Method::GET, "/questions?page=1000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
    assert_eq!(body["message"], "resource not found");
}

#[tokio::test]
async fn test_create_and_delete_question() {
    let app = app();

    let (status, body) = send(
        app.clone(),
        Method::POST,
        "/questions",
        Some(json!({
            "question": "What is the boiling point of water in Celsius?",
            "answer": "100",
            "category": "1",
            "difficulty": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 16);
    let id = body["created"].as_i64().unwrap();

    let (status, body) = send(app.clone(), Method::GET, &format!("/questions/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["answer"], "100");
    assert_eq!(body["question"]["category"], 1);

    let (status, body) = send(app.clone(), Method::DELETE, &format!("/questions/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], id);
    assert_eq!(body["total_questions"], 15);

    let (status, _) = send(app, Method::GET, &format!("/questions/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_422_create_with_missing_field() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/questions",
        Some(json!({"question": "Incomplete?", "category": 1, "difficulty": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "unprocessable");
    assert_eq!(body["code"], "UNP_001");
}

#[tokio::test]
async fn test_422_if_question_does_not_exist() {
    let app = app();
    let (status, body) = send(app.clone(), Method::DELETE, "/questions/1000", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);

    let (_, body) = send(app, Method::GET, "/questions", None).await;
    assert_eq!(body["total_questions"], 15);
}

#[tokio::test]
async fn test_search_questions() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/questions/search",
        Some(json!({"searchTerm": "QUESTION 1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    // 1, 10..=15
    assert_eq!(body["total_questions"], 7);
    assert_eq!(body["questions"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_search_without_term_is_bad_request() {
    let (status, body) = send(app(), Method::POST, "/questions/search", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "REQ_003");
}

#[tokio::test]
async fn test_questions_by_category() {
    let (status, body) = send(app(), Method::GET, "/categories/2/questions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_category"], "Art");
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert!(questions.iter().all(|q| q["category"] == 2));
}

#[tokio::test]
async fn test_404_unknown_category() {
    let (status, _) = send(app(), Method::GET, "/categories/99/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(app(), Method::GET, "/categories/science/questions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quiz_in_category_excludes_previous() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/quizzes",
        Some(json!({
            "previous_questions": [1, 4, 7, 10],
            "quiz_category": {"id": "1", "type": "Science"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["id"], 13);
}

#[tokio::test]
async fn test_quiz_exhausted_returns_null_question() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/quizzes",
        Some(json!({
            "previous_questions": [1, 4, 7, 10, 13],
            "quiz_category": {"id": 1, "type": "Science"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["question"].is_null());
}

#[tokio::test]
async fn test_quiz_all_categories() {
    let previous: Vec<i64> = (1..=14).collect();
    let (status, body) = send(
        app(),
        Method::POST,
        "/quizzes",
        Some(json!({"previous_questions": previous, "quiz_category": {"id": 0, "type": "click"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 15);
}

#[tokio::test]
async fn test_quiz_missing_parameters_is_bad_request() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/quizzes",
        Some(json!({"previous_questions": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "REQ_001");

    let (status, body) = send(
        app(),
        Method::POST,
        "/quizzes",
        Some(json!({"quiz_category": {"id": 0}})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "REQ_002");
}

#[tokio::test]
async fn test_unknown_route_uses_error_envelope() {
    let (status, body) = send(app(), Method::GET, "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_405_uses_error_envelope() {
    let (status, body) = send(app(), Method::PUT, "/questions", Some(json!({}))).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 405);
    assert_eq!(body["message"], "method not allowed");
}

#[tokio::test]
async fn test_405_keeps_allow_header() {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/quizzes")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let allow = response.headers()[header::ALLOW].to_str().unwrap();
    assert!(allow.contains("POST"));
}

#[tokio::test]
async fn test_unparseable_query_falls_back_to_first_page() {
    let (status, body) = send(app(), Method::GET, "/questions?page=1&page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["questions"][0]["id"], 1);
    assert_eq!(body["questions"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_malformed_quiz_input_is_bad_request() {
    let bodies = [
        json!({"previous_questions": "abc", "quiz_category": {"id": 1}}),
        json!({"previous_questions": [1, "x"], "quiz_category": {"id": 1}}),
        json!({"previous_questions": [], "quiz_category": {"type": "x"}}),
        json!({"previous_questions": [], "quiz_category": {"id": "science"}}),
    ];

    for request in bodies {
        let (status, body) = send(app(), Method::POST, "/quizzes", Some(request.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", request);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "bad request");
        assert_eq!(body["code"], "REQ_004");
    }
}

#[tokio::test]
async fn test_malformed_search_body_is_bad_request() {
    let (status, body) = send(
        app(),
        Method::POST,
        "/questions/search",
        Some(json!({"searchTerm": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "REQ_004");
}

#[tokio::test]
async fn test_non_numeric_question_id_is_not_found() {
    let app = app();
    let (status, body) = send(app.clone(), Method::DELETE, "/questions/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, _) = send(app.clone(), Method::GET, "/questions/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(app, Method::GET, "/questions", None).await;
    assert_eq!(body["total_questions"], 15);
}
