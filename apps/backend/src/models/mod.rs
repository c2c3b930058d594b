//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from courseware-core
pub use courseware_core::{
    Course, Flashcard, FlashcardPreview, IdSource, NewCourse, Resource, ResourceKind, Video,
};

// === Flashcard Types ===

#[derive(Debug, Deserialize)]
pub struct FlashcardPreviewRequest {
    pub csv: String,
}

#[derive(Debug, Serialize)]
pub struct FlashcardPreviewResponse {
    pub summary: String,
    #[serde(flatten)]
    pub preview: FlashcardPreview,
    pub cards: Vec<Flashcard>,
}

// === Video Types ===

#[derive(Debug, Deserialize)]
pub struct NormalizeVideoRequest {
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct NormalizeVideoResponse {
    pub video_id: String,
    /// Whether `video_id` is a bare identifier.
    pub recognized: bool,
    pub source: IdSource,
}

#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub title: String,
    pub youtube_url: String,
}

// === Resource Types ===

/// New resource. Flashcard sets send the CSV text, everything else sends a link.
#[derive(Debug, Deserialize)]
pub struct CreateResourceRequest {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub title: String,
    #[serde(default)]
    pub drive_link: Option<String>,
    #[serde(default)]
    pub csv: Option<String>,
}

// === Course Types ===

/// Course list entry
#[derive(Debug, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub semester: String,
    pub subject: String,
    pub video_count: usize,
    pub resource_count: usize,
    pub flashcard_count: usize,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            title: course.title.clone(),
            semester: course.semester.clone(),
            subject: course.subject.clone(),
            video_count: course.videos.len(),
            resource_count: course.resources.len(),
            flashcard_count: course
                .resources_of(ResourceKind::Flashcard)
                .map(Resource::card_count)
                .sum(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseSummary>,
}
