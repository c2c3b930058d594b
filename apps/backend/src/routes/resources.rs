//! Course resource endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::services::courses;
use crate::AppState;

/// POST /api/courses/:course_id/resources
/// Flashcard sets are parsed from `csv`; other kinds need `drive_link`
pub async fn create(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(payload): Json<CreateResourceRequest>,
) -> Result<Json<Resource>> {
    let resource = courses::add_resource(state.store.as_ref(), &course_id, payload).await?;
    Ok(Json(resource))
}

/// DELETE /api/courses/:course_id/resources/:resource_id
pub async fn delete(
    State(state): State<AppState>,
    Path((course_id, resource_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>> {
    let deleted =
        courses::remove_resource(state.store.as_ref(), &course_id, &resource_id).await?;

    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
