//! Test fixtures and factory functions for creating request bodies.

use serde_json::json;

/// Generate two-column CSV text with `num_cards` rows.
pub fn sample_csv(num_cards: usize) -> String {
    (1..=num_cards)
        .map(|i| format!("Question {}?,Answer {}.", i, i))
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Create a course creation request body.
pub fn new_course_request(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Test course",
        "semester": "Sem 1",
        "subject": "Computer Science",
        "instructor": "Prof. Smith",
        "credits": 4
    })
}

/// Create a flashcard preview request body.
pub fn preview_request(csv: &str) -> serde_json::Value {
    json!({ "csv": csv })
}

/// Create a flashcard resource request body.
pub fn flashcard_resource_request(title: &str, csv: &str) -> serde_json::Value {
    json!({
        "type": "flashcard",
        "title": title,
        "csv": csv
    })
}

/// Create a link resource request body.
pub fn link_resource_request(kind: &str, title: &str, drive_link: &str) -> serde_json::Value {
    json!({
        "type": kind,
        "title": title,
        "drive_link": drive_link
    })
}

/// Create a video request body.
pub fn video_request(title: &str, youtube_url: &str) -> serde_json::Value {
    json!({
        "title": title,
        "youtube_url": youtube_url
    })
}
