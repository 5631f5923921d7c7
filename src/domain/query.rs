//! Mapping from a reader's mood (and optional author) to a catalog search
//! expression.

use serde::Serialize;

/// Separator used between clauses and in place of whitespace.
pub const QUERY_SEPARATOR: char = '+';

/// Search term used when neither a mood nor an author was given.
pub const FALLBACK_QUERY: &str = "bestseller";

/// A mood and the catalog keywords it expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mood {
    pub mood: &'static str,
    pub keywords: &'static [&'static str],
}

const MOODS: &[Mood] = &[
    Mood {
        mood: "happy",
        keywords: &["feel-good", "humor", "optimistic", "uplifting"],
    },
    Mood {
        mood: "sad",
        keywords: &["melancholy", "tragic", "loss", "heartbreak"],
    },
    Mood {
        mood: "adventurous",
        keywords: &["adventure", "thriller", "action"],
    },
    Mood {
        mood: "romantic",
        keywords: &["romance", "love story", "romantic"],
    },
    Mood {
        mood: "scared",
        keywords: &["horror", "thriller", "ghost"],
    },
    Mood {
        mood: "curious",
        keywords: &["nonfiction", "science", "history", "mystery"],
    },
    Mood {
        mood: "calm",
        keywords: &["meditation", "mindfulness", "poetry"],
    },
];

/// All known moods, in table order.
pub fn moods() -> &'static [Mood] {
    MOODS
}

/// Look up a mood's keywords, ignoring case and surrounding whitespace.
pub fn mood_keywords(emotion: &str) -> Option<&'static [&'static str]> {
    let needle = emotion.trim();
    MOODS
        .iter()
        .find(|m| m.mood.eq_ignore_ascii_case(needle))
        .map(|m| m.keywords)
}

/// Build a catalog search expression from a mood and an author.
///
/// The author clause (`inauthor:<name>`) comes first. A recognised mood
/// expands to its keywords; anything else is passed through as typed.
/// Whitespace becomes `+`. Returns an empty string when both inputs are
/// absent or empty.
pub fn build_query(emotion: Option<&str>, author: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(2);

    if let Some(author) = author.filter(|a| !a.is_empty()) {
        parts.push(format!("inauthor:{author}"));
    }

    if let Some(emotion) = emotion.filter(|e| !e.is_empty()) {
        match mood_keywords(emotion) {
            Some(keywords) => parts.push(keywords.join(" ")),
            None => parts.push(emotion.to_string()),
        }
    }

    parts
        .iter()
        .map(|part| replace_whitespace(part))
        .collect::<Vec<_>>()
        .join(&QUERY_SEPARATOR.to_string())
}

/// The expression actually sent to the catalog: [`build_query`], or
/// [`FALLBACK_QUERY`] when that comes back empty.
///
/// `build_query` only returns an empty string when there is neither an author
/// nor a mood, so there is nothing narrower to fall back to.
pub fn search_expression(emotion: Option<&str>, author: Option<&str>) -> String {
    let query = build_query(emotion, author);
    if query.is_empty() {
        FALLBACK_QUERY.to_string()
    } else {
        query
    }
}

fn replace_whitespace(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { QUERY_SEPARATOR } else { c })
        .collect()
}
