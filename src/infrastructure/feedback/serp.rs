use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::errors::FetchError;
use crate::domain::feedback::{FeedbackItem, FeedbackSource};
use crate::domain::repositories::FeedbackRepository;
use crate::infrastructure::credentials::CredentialPool;
use crate::infrastructure::http::{FEEDBACK_TIMEOUT, get_json};

/// Web search results for `"<query> book review"`.
pub struct SerpApiFeedback {
    http: reqwest::Client,
    url: String,
    keys: CredentialPool,
    timeout: Duration,
}

impl SerpApiFeedback {
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
impl FeedbackRepository for SerpApiFeedback {
    fn source(&self) -> FeedbackSource {
        FeedbackSource::Serp
    }

    async fn fetch(&self, query: &str, num: usize) -> Result<Vec<FeedbackItem>, FetchError> {
        let key = self.keys.pick().ok_or(FetchError::NotConfigured)?;

        let request = self.http.get(&self.url).query(&[
            ("q", format!("{query} book review").as_str()),
            ("api_key", key),
        ]);
        let response: SearchResponse = get_json(request, self.timeout).await?;

        Ok(response
            .organic_results
            .into_iter()
            .take(num)
            .map(OrganicResult::into_item)
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    title: Option<String>,
    snippet: Option<String>,
    snippet_text: Option<String>,
    link: Option<String>,
    displayed_link: Option<String>,
}

impl OrganicResult {
    fn into_item(self) -> FeedbackItem {
        FeedbackItem {
            title: self.title,
            snippet: first_non_empty(self.snippet, self.snippet_text),
            link: first_non_empty(self.link, self.displayed_link),
        }
    }
}

fn first_non_empty(primary: Option<String>, fallback: Option<String>) -> String {
    primary
        .filter(|v| !v.is_empty())
        .or(fallback)
        .unwrap_or_default()
}
