//! Adapters for the third-party commentary sources.

mod news;
mod reddit;
mod serp;
mod youtube;

use std::sync::Arc;
use std::time::Duration;

pub use news::NewsApiFeedback;
pub use reddit::RedditFeedback;
pub use serp::SerpApiFeedback;
pub use youtube::YoutubeFeedback;

use crate::domain::repositories::FeedbackRepository;
use crate::infrastructure::credentials::Credentials;
use crate::infrastructure::endpoints::Endpoints;

/// Build one adapter per source, sharing the HTTP client.
pub fn feedback_repositories(
    http: &reqwest::Client,
    endpoints: &Endpoints,
    credentials: &Credentials,
    timeout: Duration,
) -> Vec<Arc<dyn FeedbackRepository>> {
    vec![
        Arc::new(
            SerpApiFeedback::new(
                http.clone(),
                endpoints.serpapi.clone(),
                credentials.serpapi.clone(),
            )
            .with_timeout(timeout),
        ),
        Arc::new(
            YoutubeFeedback::new(
                http.clone(),
                endpoints.youtube.clone(),
                credentials.youtube.clone(),
            )
            .with_timeout(timeout),
        ),
        Arc::new(
            NewsApiFeedback::new(http.clone(), endpoints.news.clone(), credentials.news.clone())
                .with_timeout(timeout),
        ),
        Arc::new(
            RedditFeedback::new(
                http.clone(),
                endpoints.reddit.clone(),
                credentials.reddit_user_agent.clone(),
            )
            .with_timeout(timeout),
        ),
    ]
}
