//! Video endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::services::courses;
use crate::AppState;

/// POST /api/videos/normalize
/// Reports the video identifier a pasted link resolves to
pub async fn normalize(
    Json(payload): Json<NormalizeVideoRequest>,
) -> Json<NormalizeVideoResponse> {
    let (video_id, source) = courseware_core::extract_video_id(&payload.input);

    Json(NormalizeVideoResponse {
        recognized: courseware_core::is_video_id(&video_id),
        video_id,
        source,
    })
}

/// POST /api/courses/:course_id/videos
pub async fn create(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Json(payload): Json<CreateVideoRequest>,
) -> Result<Json<Video>> {
    let video = courses::add_video(
        state.store.as_ref(),
        &course_id,
        &payload.title,
        &payload.youtube_url,
    )
    .await?;
    Ok(Json(video))
}

/// DELETE /api/courses/:course_id/videos/:video_id
pub async fn delete(
    State(state): State<AppState>,
    Path((course_id, video_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>> {
    let deleted = courses::remove_video(state.store.as_ref(), &course_id, &video_id).await?;

    Ok(Json(serde_json::json!({ "deleted": deleted })))
}
