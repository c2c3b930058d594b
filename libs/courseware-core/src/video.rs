//! YouTube video identifier normalization.
//!
//! Staff paste links in whatever shape their browser gave them. The normalizer returns
//! the 11-character video identifier when one can be found and otherwise echoes the
//! input back untouched, leaving the caller to decide whether the result is usable.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// URL shapes tried in order; the first capture group is the identifier.
const URL_SHAPES: &[(&str, &str)] = &[
    ("watch", r"youtube\.com/watch\?.*v=([A-Za-z0-9_-]{11})"),
    ("short_link", r"youtu\.be/([A-Za-z0-9_-]{11})"),
    ("embed", r"youtube\.com/embed/([A-Za-z0-9_-]{11})"),
    ("shorts", r"youtube\.com/shorts/([A-Za-z0-9_-]{11})"),
    ("live", r"youtube\.com/live/([A-Za-z0-9_-]{11})"),
    ("nocookie_embed", r"youtube-nocookie\.com/embed/([A-Za-z0-9_-]{11})"),
    ("mobile_watch", r"m\.youtube\.com/watch\?.*v=([A-Za-z0-9_-]{11})"),
];

lazy_static! {
    static ref BARE_ID: Regex = Regex::new(r"^[A-Za-z0-9_-]{11}$").unwrap();
    static ref ANY_ID_RUN: Regex = Regex::new(r"[A-Za-z0-9_-]{11}").unwrap();
    static ref SHAPES: Vec<(&'static str, Regex)> = URL_SHAPES
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(pattern).unwrap()))
        .collect();
}

/// Whether `value` is exactly one video identifier and nothing else.
pub fn is_video_id(value: &str) -> bool {
    BARE_ID.is_match(value)
}

/// How an identifier was obtained from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "shape")]
pub enum IdSource {
    /// The input was already a bare identifier.
    Bare,
    /// A known URL shape matched; carries the shape name.
    UrlShape(&'static str),
    /// The first identifier-alphabet run in the input.
    Fallback,
    /// Nothing matched and the input was echoed back.
    Unrecognized,
}

/// Extract a video identifier and report which rule produced it.
pub fn extract_video_id(input: &str) -> (String, IdSource) {
    let trimmed = input.trim();

    if is_video_id(trimmed) {
        return (trimmed.to_string(), IdSource::Bare);
    }

    for (name, re) in SHAPES.iter() {
        if let Some(id) = re.captures(trimmed).and_then(|caps| caps.get(1)) {
            return (id.as_str().to_string(), IdSource::UrlShape(*name));
        }
    }

    match ANY_ID_RUN.find(trimmed) {
        Some(run) => (run.as_str().to_string(), IdSource::Fallback),
        None => (input.to_string(), IdSource::Unrecognized),
    }
}

/// Best-effort extraction of a video identifier from a URL or bare identifier.
///
/// Order of attempts:
/// 1. the trimmed input is already a bare identifier;
/// 2. a known URL shape (watch, youtu.be, embed, shorts, live, nocookie embed, mobile);
/// 3. the first 11-character identifier-alphabet run anywhere in the input;
/// 4. the input, unchanged.
pub fn normalize_video_id(input: &str) -> String {
    extract_video_id(input).0
}
