//! Core types for course content.
//!
//! Stored documents use camelCase field names (`driveLink`, `youtubeId`, `createdAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ResourceError, Result};
use crate::video::normalize_video_id;

/// Default accent color for new courses.
pub const DEFAULT_COURSE_COLOR: &str = "#FFD93D";

/// One question/answer pair from a flashcard set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// Unique within the batch it was extracted in.
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// Kind of course resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Textbook,
    Ppt,
    Flashcard,
    ProblemSet,
    QuestionPaper,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        Self::Textbook,
        Self::Ppt,
        Self::Flashcard,
        Self::ProblemSet,
        Self::QuestionPaper,
    ];

    /// Get the kind name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Textbook => "textbook",
            Self::Ppt => "ppt",
            Self::Flashcard => "flashcard",
            Self::ProblemSet => "problemset",
            Self::QuestionPaper => "questionpaper",
        }
    }

    /// Parse from the stored name.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Textbook => "Textbook / Reference Book",
            Self::Ppt => "PPT / Presentation",
            Self::Flashcard => "Flashcards",
            Self::ProblemSet => "Problem Set",
            Self::QuestionPaper => "Question Paper",
        }
    }

    /// Flashcard sets carry cards; every other kind carries a link.
    pub fn carries_cards(&self) -> bool {
        matches!(self, Self::Flashcard)
    }
}

/// A committed course resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub title: String,
    pub drive_link: Option<String>,
    pub cards: Option<Vec<Flashcard>>,
    pub created_at: DateTime<Utc>,
}

impl Resource {
    /// Number of cards, zero for link resources.
    pub fn card_count(&self) -> usize {
        self.cards.as_ref().map_or(0, Vec::len)
    }
}

/// Unvalidated resource as submitted by staff.
#[derive(Debug, Clone)]
pub struct ResourceDraft {
    pub kind: ResourceKind,
    pub title: String,
    pub drive_link: Option<String>,
    pub cards: Vec<Flashcard>,
}

impl ResourceDraft {
    /// Check the draft and turn it into a resource.
    ///
    /// Flashcard sets keep only their cards, link resources keep only their link.
    pub fn validate(self, id: String, created_at: DateTime<Utc>) -> Result<Resource> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ResourceError::MissingTitle);
        }

        let (drive_link, cards) = if self.kind.carries_cards() {
            if self.cards.is_empty() {
                return Err(ResourceError::NoFlashcards);
            }
            (None, Some(self.cards))
        } else {
            let link = self
                .drive_link
                .as_deref()
                .map(str::trim)
                .filter(|link| !link.is_empty())
                .ok_or(ResourceError::MissingDriveLink {
                    kind: self.kind.as_str(),
                })?;
            (Some(link.to_string()), None)
        };

        Ok(Resource {
            id,
            kind: self.kind,
            title: title.to_string(),
            drive_link,
            cards,
            created_at,
        })
    }
}

/// A course video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub youtube_id: String,
}

impl Video {
    /// Build a video from a pasted link, normalizing it to an identifier.
    pub fn from_link(id: String, title: &str, link: &str) -> Result<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ResourceError::MissingTitle);
        }
        if link.trim().is_empty() {
            return Err(ResourceError::MissingVideoLink);
        }

        Ok(Self {
            id,
            title: title.to_string(),
            youtube_id: normalize_video_id(link),
        })
    }

    /// Canonical watch URL.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.youtube_id)
    }
}

/// Fields supplied when creating a course.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCourse {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub credits: Option<u32>,
}

/// Course document with its attached videos and resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub color: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub credits: Option<u32>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Course {
    /// Create an empty course from submitted fields.
    pub fn new(id: String, fields: NewCourse) -> Self {
        Self {
            id,
            title: fields.title.trim().to_string(),
            description: fields.description,
            color: fields
                .color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COURSE_COLOR.to_string()),
            semester: fields.semester,
            subject: fields.subject,
            instructor: fields.instructor,
            credits: fields.credits,
            videos: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Remove a video by ID. Returns whether it existed.
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        let before = self.videos.len();
        self.videos.retain(|v| v.id != video_id);
        self.videos.len() != before
    }

    /// Remove a resource by ID. Returns whether it existed.
    pub fn remove_resource(&mut self, resource_id: &str) -> bool {
        let before = self.resources.len();
        self.resources.retain(|r| r.id != resource_id);
        self.resources.len() != before
    }

    /// Resources of one kind, in insertion order.
    pub fn resources_of(&self, kind: ResourceKind) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(move |r| r.kind == kind)
    }
}
