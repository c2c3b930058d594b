//! Course content operations on top of a [`CourseStore`].

use chrono::Utc;
use courseware_core::{
    extract_flashcards, Course, Flashcard, FlashcardPreview, NewCourse, Resource, ResourceDraft,
    Video,
};
use uuid::Uuid;

use crate::db::CourseStore;
use crate::error::{ApiError, Result};
use crate::models::CreateResourceRequest;

/// Generate a prefixed document ID such as `res_3f2a...`.
pub fn new_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

fn course_not_found(course_id: &str) -> ApiError {
    ApiError::NotFound(format!("Course {}", course_id))
}

/// Parse uploaded CSV text and summarize it without saving anything.
pub fn preview_flashcards(csv: &str) -> (Vec<Flashcard>, FlashcardPreview) {
    let cards = extract_flashcards(csv);
    let preview = FlashcardPreview::from_cards(&cards);
    (cards, preview)
}

pub async fn create_course(store: &dyn CourseStore, fields: NewCourse) -> Result<Course> {
    if fields.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Course title is required".to_string()));
    }

    let course = Course::new(new_id("course"), fields);
    store.put(&course).await?;

    tracing::info!("Created course {} ({})", course.id, course.title);
    Ok(course)
}

pub async fn get_course(store: &dyn CourseStore, course_id: &str) -> Result<Course> {
    store
        .get(course_id)
        .await?
        .ok_or_else(|| course_not_found(course_id))
}

pub async fn delete_course(store: &dyn CourseStore, course_id: &str) -> Result<bool> {
    let deleted = store.delete(course_id).await?;
    if deleted {
        tracing::info!("Deleted course {}", course_id);
    }
    Ok(deleted)
}

/// Attach a video, normalizing the pasted link to a video identifier.
pub async fn add_video(
    store: &dyn CourseStore,
    course_id: &str,
    title: &str,
    link: &str,
) -> Result<Video> {
    let video = Video::from_link(new_id("vid"), title, link)?;
    if !courseware_core::is_video_id(&video.youtube_id) {
        tracing::warn!("No video identifier found in link for course {}", course_id);
    }

    let mut pending = Some(video.clone());
    store
        .modify(course_id, &mut |course: &mut Course| {
            course.videos.extend(pending.take());
        })
        .await?
        .ok_or_else(|| course_not_found(course_id))?;

    tracing::info!("Added video {} to course {}", video.id, course_id);
    Ok(video)
}

pub async fn remove_video(
    store: &dyn CourseStore,
    course_id: &str,
    video_id: &str,
) -> Result<bool> {
    let mut removed = false;
    store
        .modify(course_id, &mut |course: &mut Course| {
            removed = course.remove_video(video_id);
        })
        .await?
        .ok_or_else(|| course_not_found(course_id))?;

    if removed {
        tracing::info!("Removed video {} from course {}", video_id, course_id);
    }
    Ok(removed)
}

/// Validate and attach a resource. Flashcard sets are extracted from the submitted CSV.
pub async fn add_resource(
    store: &dyn CourseStore,
    course_id: &str,
    request: CreateResourceRequest,
) -> Result<Resource> {
    let cards = match (request.kind.carries_cards(), request.csv.as_deref()) {
        (true, Some(csv)) => extract_flashcards(csv),
        _ => Vec::new(),
    };

    let draft = ResourceDraft {
        kind: request.kind,
        title: request.title,
        drive_link: request.drive_link,
        cards,
    };
    let resource = draft.validate(new_id("res"), Utc::now())?;

    let mut pending = Some(resource.clone());
    store
        .modify(course_id, &mut |course: &mut Course| {
            course.resources.extend(pending.take());
        })
        .await?
        .ok_or_else(|| course_not_found(course_id))?;

    tracing::info!(
        "Added {} resource {} to course {} ({} cards)",
        resource.kind.as_str(),
        resource.id,
        course_id,
        resource.card_count()
    );
    Ok(resource)
}

pub async fn remove_resource(
    store: &dyn CourseStore,
    course_id: &str,
    resource_id: &str,
) -> Result<bool> {
    let mut removed = false;
    store
        .modify(course_id, &mut |course: &mut Course| {
            removed = course.remove_resource(resource_id);
        })
        .await?
        .ok_or_else(|| course_not_found(course_id))?;

    if removed {
        tracing::info!("Removed resource {} from course {}", resource_id, course_id);
    }
    Ok(removed)
}
