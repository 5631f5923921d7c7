use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use serde::Deserialize;

use crate::domain::errors::FetchError;
use crate::domain::feedback::{FeedbackItem, FeedbackSource};
use crate::domain::repositories::FeedbackRepository;
use crate::infrastructure::credentials::{CredentialPool, DEFAULT_REDDIT_USER_AGENT};
use crate::infrastructure::http::{FEEDBACK_TIMEOUT, get_json};

const PERMALINK_BASE: &str = "https://reddit.com";

/// Forum posts for `"<query> book"`. Needs no API key, only a user agent.
pub struct RedditFeedback {
    http: reqwest::Client,
    url: String,
    user_agents: CredentialPool,
    timeout: Duration,
}

impl RedditFeedback {
    pub fn new(http: reqwest::Client, url: impl Into<String>, user_agents: CredentialPool) -> Self {
        Self {
            http,
            url: url.into(),
            user_agents,
            timeout: FEEDBACK_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl FeedbackRepository for RedditFeedback {
    fn source(&self) -> FeedbackSource {
        FeedbackSource::Reddit
    }

    async fn fetch(&self, query: &str, num: usize) -> Result<Vec<FeedbackItem>, FetchError> {
        let user_agent = self.user_agents.pick().unwrap_or(DEFAULT_REDDIT_USER_AGENT);

        let request = self
            .http
            .get(&self.url)
            .header(USER_AGENT, user_agent)
            .query(&[
                ("q", format!("{query} book").as_str()),
                ("limit", num.to_string().as_str()),
                ("sort", "relevance"),
            ]);
        let response: Listing = get_json(request, self.timeout).await?;

        Ok(response
            .data
            .children
            .into_iter()
            .take(num)
            .map(|child| child.data.into_item())
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    #[serde(default)]
    data: Post,
}

#[derive(Debug, Default, Deserialize)]
struct Post {
    title: Option<String>,
    selftext: Option<String>,
    permalink: Option<String>,
}

impl Post {
    fn into_item(self) -> FeedbackItem {
        FeedbackItem {
            title: self.title,
            snippet: self.selftext.unwrap_or_default(),
            link: self
                .permalink
                .filter(|p| !p.is_empty())
                .map(|p| format!("{PERMALINK_BASE}{p}"))
                .unwrap_or_default(),
        }
    }
}
