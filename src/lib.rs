//! Bookstore server
//!
//! An in-memory book catalog exposed as a REST JSON API.

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// State with an empty book store
    pub fn new(config: AppConfig) -> Self {
        let repository = repository::Repository::new();
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Books
        .route(
            "/books",
            get(api::books::list_books).post(api::books::create_book),
        )
        .route(
            "/books/",
            get(api::books::missing_book_id)
                .put(api::books::missing_book_id)
                .delete(api::books::missing_book_id),
        )
        .route(
            "/books/:id",
            get(api::books::get_book)
                .put(api::books::update_book)
                .delete(api::books::delete_book),
        )
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(api::openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(AppConfig::default()))
    }

    #[tokio::test]
    async fn test_create_and_get_book() {
        let state = AppState::new(AppConfig::default());

        let response = create_router(state.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/books")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"id": 1, "title": "Book 1"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = create_router(state)
            .oneshot(Request::builder().uri("/books/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let book: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(book, json!({"id": 1, "title": "Book 1"}));
    }

    #[tokio::test]
    async fn test_failures_have_empty_bad_request_body() {
        let response = app()
            .oneshot(Request::builder().uri("/books/404").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_put_without_body_is_a_no_op_merge() {
        let state = AppState::new(AppConfig::default());
        state
            .services
            .books
            .create(match json!({"id": "abc", "title": "Kept"}) {
                Value::Object(map) => map,
                _ => unreachable!(),
            })
            .await
            .unwrap();

        let response = create_router(state)
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/books/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let book: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(book, json!({"id": "abc", "title": "Kept"}));
    }
}
