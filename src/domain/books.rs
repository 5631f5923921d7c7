use serde::{Deserialize, Serialize};

use super::feedback::BookFeedback;

/// A catalog search result. Every field is best-effort; missing data is empty,
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub thumbnail: Option<String>,
    pub info_link: Option<String>,
    pub published_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<BookFeedback>,
}

impl Book {
    pub fn first_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }
}
