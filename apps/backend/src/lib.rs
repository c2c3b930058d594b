pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::{CourseStore, MemoryCourseStore, PgCourseStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CourseStore>,
}

impl AppState {
    pub fn new(store: impl CourseStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Flashcard routes
        .route("/api/flashcards/preview", post(routes::flashcards::preview))
        // Video routes
        .route("/api/videos/normalize", post(routes::videos::normalize))
        // Course routes
        .route(
            "/api/courses",
            get(routes::courses::list).post(routes::courses::create),
        )
        .route(
            "/api/courses/:course_id",
            get(routes::courses::get).delete(routes::courses::delete),
        )
        .route(
            "/api/courses/:course_id/videos",
            post(routes::videos::create),
        )
        .route(
            "/api/courses/:course_id/videos/:video_id",
            delete(routes::videos::delete),
        )
        .route(
            "/api/courses/:course_id/resources",
            post(routes::resources::create),
        )
        .route(
            "/api/courses/:course_id/resources/:resource_id",
            delete(routes::resources::delete),
        )
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            tracing::info!("Connecting to database...");
            let store = PgCourseStore::connect(&database_url).await?;

            tracing::info!("Running migrations...");
            store.run_migrations().await?;

            AppState::new(store)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, courses are kept in memory only");
            AppState::new(MemoryCourseStore::new())
        }
    };
    tracing::info!("Using {} course store", state.store.name());

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_responds() {
        let app = router(AppState::new(MemoryCourseStore::new()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let app = router(AppState::new(MemoryCourseStore::new()));

        let response = app
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
