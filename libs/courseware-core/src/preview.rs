//! Pre-commit summary of an extracted flashcard set.

use serde::Serialize;

use crate::types::Flashcard;

/// Number of cards shown as samples.
pub const SAMPLE_SIZE: usize = 3;

/// Characters kept from each sample question/answer.
pub const SAMPLE_TEXT_LIMIT: usize = 80;

const EMPTY_MESSAGE: &str =
    "No valid flashcards found. Make sure Column A has questions and Column B has answers.";

/// Shortened card shown in a preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSample {
    pub question: String,
    pub answer: String,
}

/// Summary shown to staff before a flashcard set is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashcardPreview {
    pub total: usize,
    pub samples: Vec<CardSample>,
    /// Cards not included in `samples`.
    pub remaining: usize,
}

impl FlashcardPreview {
    pub fn from_cards(cards: &[Flashcard]) -> Self {
        let samples: Vec<CardSample> = cards
            .iter()
            .take(SAMPLE_SIZE)
            .map(|card| CardSample {
                question: shorten(&card.question),
                answer: shorten(&card.answer),
            })
            .collect();

        Self {
            total: cards.len(),
            remaining: cards.len() - samples.len(),
            samples,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// One-line status for the upload form.
    pub fn summary(&self) -> String {
        if self.is_empty() {
            EMPTY_MESSAGE.to_string()
        } else {
            format!("Found {} flashcards", self.total)
        }
    }
}

fn shorten(text: &str) -> String {
    match text.char_indices().nth(SAMPLE_TEXT_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
