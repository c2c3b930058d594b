//! Flashcard extraction from two-column CSV text.
//!
//! # Format
//! ```text
//! What is Rust?,A systems programming language.
//! "Borrowing, briefly",References without ownership.
//! ```
//!
//! Column A holds the question, column B the answer; further columns are ignored.
//! There is no header row. Rows are handled in order:
//! - blank lines are skipped;
//! - rows with fewer than two fields are skipped;
//! - rows where exactly one of question/answer is empty are skipped;
//! - the first row where both are empty ends the extraction, which lets trailing
//!   empty spreadsheet rows truncate the file.

use crate::csv::tokenize_line;
use crate::types::Flashcard;

/// Extract flashcards from the full text of an uploaded CSV file.
///
/// Never fails: an empty result means no usable rows were found.
pub fn extract_flashcards(text: &str) -> Vec<Flashcard> {
    let mut cards = Vec::new();

    for (idx, line) in text.split('\n').enumerate() {
        let line = trim_cell(line.strip_suffix('\r').unwrap_or(line));
        if line.is_empty() {
            continue;
        }

        let fields = tokenize_line(line);
        let (question, answer) = match fields.as_slice() {
            [question, answer, ..] => (trim_cell(question), trim_cell(answer)),
            _ => continue,
        };

        match (question.is_empty(), answer.is_empty()) {
            (true, true) => break,
            (false, false) => cards.push(Flashcard {
                id: card_id(idx),
                question: question.to_string(),
                answer: answer.to_string(),
            }),
            _ => {}
        }
    }

    cards
}

/// Trim whitespace and byte order marks, which spreadsheet UTF-8 exports prepend.
fn trim_cell(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Identifier for the card parsed from the given 0-indexed line.
fn card_id(line_idx: usize) -> String {
    format!("card_{}", line_idx)
}
