//! Course document storage.
//!
//! Each course is one document holding its videos and resources, the same shape the
//! dashboard reads and writes. Two backends implement [`CourseStore`]: PostgreSQL for
//! deployments and an in-process map for local runs and tests.

mod postgres;

pub use postgres::PgCourseStore;

use async_trait::async_trait;
use courseware_core::Course;
use tokio::sync::RwLock;

use crate::error::Result;

/// Document store keyed by course ID.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Backend name for logs.
    fn name(&self) -> &'static str;

    /// All courses, oldest first.
    async fn list(&self) -> Result<Vec<Course>>;

    /// Get a course by ID.
    async fn get(&self, course_id: &str) -> Result<Option<Course>>;

    /// Insert or replace a course document.
    async fn put(&self, course: &Course) -> Result<()>;

    /// Delete a course. Returns whether it existed.
    async fn delete(&self, course_id: &str) -> Result<bool>;

    /// Apply `edit` to a stored course atomically and return the updated document.
    ///
    /// Returns `None` without calling `edit` when the course does not exist.
    async fn modify(
        &self,
        course_id: &str,
        edit: &mut (dyn for<'c> FnMut(&'c mut Course) + Send),
    ) -> Result<Option<Course>>;
}

/// In-memory course store.
#[derive(Default)]
pub struct MemoryCourseStore {
    courses: RwLock<Vec<Course>>,
}

impl MemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CourseStore for MemoryCourseStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<Course>> {
        Ok(self.courses.read().await.clone())
    }

    async fn get(&self, course_id: &str) -> Result<Option<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.iter().find(|c| c.id == course_id).cloned())
    }

    async fn put(&self, course: &Course) -> Result<()> {
        let mut courses = self.courses.write().await;
        match courses.iter_mut().find(|c| c.id == course.id) {
            Some(existing) => *existing = course.clone(),
            None => courses.push(course.clone()),
        }
        Ok(())
    }

    async fn delete(&self, course_id: &str) -> Result<bool> {
        let mut courses = self.courses.write().await;
        let before = courses.len();
        courses.retain(|c| c.id != course_id);
        Ok(courses.len() != before)
    }

    async fn modify(
        &self,
        course_id: &str,
        edit: &mut (dyn for<'c> FnMut(&'c mut Course) + Send),
    ) -> Result<Option<Course>> {
        let mut courses = self.courses.write().await;
        Ok(courses.iter_mut().find(|c| c.id == course_id).map(|course| {
            edit(course);
            course.clone()
        }))
    }
}
