use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One piece of third-party commentary about a book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub title: Option<String>,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub link: String,
}

/// Per-source commentary attached to a book during an eager search.
pub type BookFeedback = BTreeMap<FeedbackSource, Vec<FeedbackItem>>;

/// The third-party services commentary is collected from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackSource {
    /// Web search results (`SerpAPI`).
    Serp,
    /// Video search.
    Youtube,
    /// News articles.
    News,
    /// Forum posts.
    #[default]
    Reddit,
}

impl FeedbackSource {
    pub const ALL: [FeedbackSource; 4] = [
        FeedbackSource::Serp,
        FeedbackSource::Youtube,
        FeedbackSource::News,
        FeedbackSource::Reddit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackSource::Serp => "serp",
            FeedbackSource::Youtube => "youtube",
            FeedbackSource::News => "news",
            FeedbackSource::Reddit => "reddit",
        }
    }

    /// Parse a source name, ignoring case. Returns `None` for unknown names.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(value))
    }

    /// Parse a source name, falling back to [`FeedbackSource::Reddit`] for
    /// missing or unknown names. Reddit is the only source that needs no key.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for FeedbackSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text query used against every feedback source: `"{title} {author}"`.
pub fn feedback_query(title: &str, author: &str) -> String {
    format!("{title} {author}").trim().to_string()
}
