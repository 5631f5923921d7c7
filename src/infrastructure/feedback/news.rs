use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::errors::FetchError;
use crate::domain::feedback::{FeedbackItem, FeedbackSource};
use crate::domain::repositories::FeedbackRepository;
use crate::infrastructure::credentials::CredentialPool;
use crate::infrastructure::http::{FEEDBACK_TIMEOUT, get_json};

/// News articles mentioning the book.
pub struct NewsApiFeedback {
    http: reqwest::Client,
    url: String,
    keys: CredentialPool,
    timeout: Duration,
}

impl NewsApiFeedback {
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
impl FeedbackRepository for NewsApiFeedback {
    fn source(&self) -> FeedbackSource {
        FeedbackSource::News
    }

    async fn fetch(&self, query: &str, num: usize) -> Result<Vec<FeedbackItem>, FetchError> {
        let key = self.keys.pick().ok_or(FetchError::NotConfigured)?;

        let request = self.http.get(&self.url).query(&[
            ("q", query),
            ("apiKey", key),
            ("pageSize", num.to_string().as_str()),
        ]);
        let response: EverythingResponse = get_json(request, self.timeout).await?;

        Ok(response
            .articles
            .into_iter()
            .take(num)
            .map(|article| FeedbackItem {
                title: article.title,
                snippet: article.description.unwrap_or_default(),
                link: article.url.unwrap_or_default(),
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
}
