//! Core courseware library shared by the admin backend.
//!
//! Provides:
//! - CSV line tokenizer and flashcard extractor for spreadsheet uploads
//! - Flashcard preview summaries shown before a set is committed
//! - YouTube video identifier normalizer
//! - Shared types (Course, Resource, Video, Flashcard, etc.)

pub mod csv;
pub mod error;
pub mod parser;
pub mod preview;
pub mod types;
pub mod video;

pub use csv::tokenize_line;
pub use error::{ResourceError, Result};
pub use parser::extract_flashcards;
pub use preview::{CardSample, FlashcardPreview};
pub use types::{Course, Flashcard, NewCourse, Resource, ResourceDraft, ResourceKind, Video};
pub use video::{extract_video_id, is_video_id, normalize_video_id, IdSource};
