//! Error types for courseware-core.

use thiserror::Error;

/// Result type alias using ResourceError.
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Errors raised when a resource or video cannot be committed.
///
/// Parsing itself never fails; these only cover the commit checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("title is required")]
    MissingTitle,

    #[error("a link is required for {kind} resources")]
    MissingDriveLink { kind: &'static str },

    #[error("a video link is required")]
    MissingVideoLink,

    #[error("no valid flashcards found; column A must hold questions and column B answers")]
    NoFlashcards,
}
