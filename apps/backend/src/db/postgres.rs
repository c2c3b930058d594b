//! PostgreSQL course store

use async_trait::async_trait;
use courseware_core::Course;
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool};

use super::CourseStore;
use crate::error::{ApiError, Result};

/// Course documents stored as JSONB rows
#[derive(Clone)]
pub struct PgCourseStore {
    pool: PgPool,
}

impl PgCourseStore {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CourseStore for PgCourseStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self) -> Result<Vec<Course>> {
        let rows = sqlx::query_scalar::<_, Json<Course>>(
            r#"
            SELECT document
            FROM courses
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|Json(course)| course).collect())
    }

    async fn get(&self, course_id: &str) -> Result<Option<Course>> {
        let row = sqlx::query_scalar::<_, Json<Course>>(
            r#"
            SELECT document
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|Json(course)| course))
    }

    async fn put(&self, course: &Course) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO courses (id, document)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET
                document = EXCLUDED.document,
                updated_at = NOW()
            "#,
        )
        .bind(&course.id)
        .bind(Json(course))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, course_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(course_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn modify(
        &self,
        course_id: &str,
        edit: &mut (dyn for<'c> FnMut(&'c mut Course) + Send),
    ) -> Result<Option<Course>> {
        let mut tx = self.pool.begin().await?;

        // Held until commit
        let row = sqlx::query_scalar::<_, Json<Course>>(
            r#"
            SELECT document
            FROM courses
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(course_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(Json(mut course)) = row else {
            return Ok(None);
        };

        edit(&mut course);

        sqlx::query(
            r#"
            UPDATE courses
            SET document = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(course_id)
        .bind(Json(&course))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(course))
    }
}
