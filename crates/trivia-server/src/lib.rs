//! trivia-server - REST API server for trivia.
//!
//! # Example
//!
//! ```ignore
//! use trivia_server::{create_catalog, create_server, AppState};
//! use trivia_core::TriviaConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let catalog = create_catalog(&TriviaConfig::from_env()).unwrap();
//!     let app = create_server(AppState::new(catalog));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod error;
pub mod factory;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use factory::create_catalog;
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(axum_middleware::from_fn(
            middleware::method_not_allowed_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
