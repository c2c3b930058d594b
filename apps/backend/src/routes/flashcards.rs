//! Flashcard upload endpoints

use axum::Json;

use crate::models::*;
use crate::services::courses::preview_flashcards;

/// POST /api/flashcards/preview
/// Parses uploaded CSV text without saving it. An empty card list is a normal response.
pub async fn preview(
    Json(payload): Json<FlashcardPreviewRequest>,
) -> Json<FlashcardPreviewResponse> {
    let (cards, preview) = preview_flashcards(&payload.csv);

    tracing::debug!("Previewed {} flashcards", preview.total);

    Json(FlashcardPreviewResponse {
        summary: preview.summary(),
        preview,
        cards,
    })
}
