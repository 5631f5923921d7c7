use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::errors::FetchError;
use crate::domain::feedback::{FeedbackItem, FeedbackSource};
use crate::domain::repositories::FeedbackRepository;
use crate::infrastructure::credentials::CredentialPool;
use crate::infrastructure::http::{FEEDBACK_TIMEOUT, get_json};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Video search for `"<query> book review"`.
pub struct YoutubeFeedback {
    http: reqwest::Client,
    url: String,
    keys: CredentialPool,
    timeout: Duration,
}

impl YoutubeFeedback {
    pub fn new(http: reqwest::Client, url: impl Into<String>, keys: CredentialPool) -> Self {
        Self {
            http,
            url: url.into(),
            keys,
            timeout: FEEDBACK_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl FeedbackRepository for YoutubeFeedback {
    fn source(&self) -> FeedbackSource {
        FeedbackSource::Youtube
    }

    async fn fetch(&self, query: &str, num: usize) -> Result<Vec<FeedbackItem>, FetchError> {
        let key = self.keys.pick().ok_or(FetchError::NotConfigured)?;

        let request = self.http.get(&self.url).query(&[
            ("part", "snippet"),
            ("q", format!("{query} book review").as_str()),
            ("key", key),
            ("type", "video"),
            ("maxResults", num.to_string().as_str()),
        ]);
        let response: SearchResponse = get_json(request, self.timeout).await?;

        Ok(response
            .items
            .into_iter()
            .take(num)
            .map(SearchResult::into_item)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    id: ResultId,
    #[serde(default)]
    snippet: ResultSnippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultId {
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ResultSnippet {
    title: Option<String>,
    description: Option<String>,
}

impl SearchResult {
    fn into_item(self) -> FeedbackItem {
        let link = self
            .id
            .video_id
            .filter(|id| !id.is_empty())
            .map(|id| format!("{WATCH_URL}{id}"))
            .unwrap_or_default();

        FeedbackItem {
            title: self.snippet.title,
            snippet: self.snippet.description.unwrap_or_default(),
            link,
        }
    }
}
