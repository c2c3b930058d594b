//! Common test utilities and fixtures for integration tests.
//!
//! `TestContext::new` runs against the in-memory course store and needs nothing
//! external. `TestContext::with_database` uses PostgreSQL (set DATABASE_URL).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;

use courseware_admin_backend::db::{CourseStore, MemoryCourseStore, PgCourseStore};
use courseware_admin_backend::models::Course;
use courseware_admin_backend::{router, AppState};

/// Test context holding the store and the router built on it.
pub struct TestContext {
    pub store: Arc<dyn CourseStore>,
    app: Router,
}

impl TestContext {
    /// Create a test context backed by the in-memory store.
    pub fn new() -> Self {
        Self::from_state(AppState::new(MemoryCourseStore::new()))
    }

    /// Create a test context backed by PostgreSQL.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn with_database() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let store = PgCourseStore::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        store
            .run_migrations()
            .await
            .expect("Failed to run migrations");

        Self::from_state(AppState::new(store))
    }

    fn from_state(state: AppState) -> Self {
        let store = state.store.clone();
        Self {
            store,
            app: router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Start a test server on the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).expect("Failed to start test server")
    }

    /// Create a course through the API and return its ID.
    pub async fn create_test_course(&self, server: &TestServer, title: &str) -> String {
        let response = server
            .post("/api/courses")
            .json(&fixtures::new_course_request(title))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        body["id"]
            .as_str()
            .expect("course id in response")
            .to_string()
    }

    /// Read a course straight from the store.
    pub async fn stored_course(&self, course_id: &str) -> Option<Course> {
        self.store
            .get(course_id)
            .await
            .expect("Failed to read course")
    }

    /// Remove a course created during a test.
    pub async fn cleanup_course(&self, course_id: &str) {
        let _ = self.store.delete(course_id).await;
    }
}
