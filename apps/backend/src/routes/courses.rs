//! Course endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::services::courses;
use crate::AppState;

/// GET /api/courses
pub async fn list(State(state): State<AppState>) -> Result<Json<CourseListResponse>> {
    let all = state.store.list().await?;
    Ok(Json(CourseListResponse {
        courses: all.iter().map(CourseSummary::from).collect(),
    }))
}

/// POST /api/courses
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewCourse>,
) -> Result<Json<Course>> {
    let course = courses::create_course(state.store.as_ref(), payload).await?;
    Ok(Json(course))
}

/// GET /api/courses/:course_id
pub async fn get(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Course>> {
    let course = courses::get_course(state.store.as_ref(), &course_id).await?;
    Ok(Json(course))
}

/// DELETE /api/courses/:course_id
pub async fn delete(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let deleted = courses::delete_course(state.store.as_ref(), &course_id).await?;

    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
