use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::feedback::{BookFeedback, FeedbackItem, FeedbackSource, feedback_query};
use crate::domain::formatting::{SHORT_TITLE_MAX_LEN, trim_text};
use crate::domain::repositories::FeedbackRepository;

pub const DEFAULT_SHORT_FEEDBACK_COUNT: usize = 2;
pub const DEFAULT_FULL_FEEDBACK_COUNT: usize = 3;

/// Collects commentary about a book from the configured sources.
///
/// Nothing here fails: a missing credential, a transport error or a bad
/// response all come back as an empty list for that source.
#[derive(Clone)]
pub struct FeedbackService {
    sources: Arc<HashMap<FeedbackSource, Arc<dyn FeedbackRepository>>>,
}

impl FeedbackService {
    pub fn new(repositories: Vec<Arc<dyn FeedbackRepository>>) -> Self {
        let sources = repositories
            .into_iter()
            .map(|repo| (repo.source(), repo))
            .collect();
        Self {
            sources: Arc::new(sources),
        }
    }

    /// Preview-length feedback: titles cut to 80 characters, snippets to
    /// `max_len`. A missing title becomes an empty string.
    pub async fn short_feedback(
        &self,
        title: &str,
        author: &str,
        source: FeedbackSource,
        num: usize,
        max_len: usize,
    ) -> Vec<FeedbackItem> {
        let query = feedback_query(title, author);
        self.fetch_source(source, &query, num)
            .await
            .into_iter()
            .map(|item| FeedbackItem {
                title: Some(trim_text(item.title.as_deref(), SHORT_TITLE_MAX_LEN)),
                snippet: trim_text(Some(&item.snippet), max_len),
                link: item.link,
            })
            .collect()
    }

    /// Untrimmed feedback for a detail view.
    pub async fn full_feedback(
        &self,
        title: &str,
        author: &str,
        source: FeedbackSource,
        num: usize,
    ) -> Vec<FeedbackItem> {
        let query = feedback_query(title, author);
        self.fetch_source(source, &query, num).await
    }

    /// Query every source at once for `query`. One source failing has no
    /// effect on the others.
    pub async fn all_sources(&self, query: &str, num: usize) -> BookFeedback {
        let lookups = FeedbackSource::ALL.into_iter().map(|source| async move {
            (source, self.fetch_source(source, query, num).await)
        });
        join_all(lookups).await.into_iter().collect()
    }

    async fn fetch_source(
        &self,
        source: FeedbackSource,
        query: &str,
        num: usize,
    ) -> Vec<FeedbackItem> {
        let Some(repo) = self.sources.get(&source) else {
            debug!(%source, "no adapter registered for feedback source");
            return Vec::new();
        };

        match repo.fetch(query, num).await {
            Ok(mut items) => {
                items.truncate(num);
                items
            }
            Err(err) if err.is_not_configured() => {
                debug!(%source, "feedback source not configured, skipping");
                Vec::new()
            }
            Err(err) => {
                warn!(%source, query = %query, error = %err, "failed to fetch feedback");
                Vec::new()
            }
        }
    }
}
