use axum::Json;
use axum::extract::{Query, State};
use axum::routing::get;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::cache::FeedbackKey;
use crate::application::routes::support::empty_string_as_none;
use crate::application::services::books::DEFAULT_MAX_RESULTS;
use crate::application::services::feedback::{
    DEFAULT_FULL_FEEDBACK_COUNT, DEFAULT_SHORT_FEEDBACK_COUNT,
};
use crate::application::state::AppState;
use crate::domain::books::Book;
use crate::domain::feedback::{FeedbackItem, FeedbackSource};
use crate::domain::formatting::DEFAULT_SNIPPET_MAX_LEN;
use crate::domain::query::{Mood, moods};

pub(super) fn router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/books", get(search_books))
        .route("/feedback/short", get(short_feedback))
        .route("/feedback/full", get(full_feedback))
        .route("/moods", get(list_moods))
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    emotion: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    max_results: Option<i64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    include_feedback: Option<bool>,
}

#[tracing::instrument(skip(state))]
pub(crate) async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Book>> {
    let books = state
        .book_service
        .search_books(
            query.emotion.as_deref(),
            query.author.as_deref(),
            query.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
            query.include_feedback.unwrap_or(false),
        )
        .await;
    Json(books)
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedbackQuery {
    title: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    num: Option<usize>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    max_len: Option<usize>,
}

impl FeedbackQuery {
    fn author(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }

    fn source(&self) -> FeedbackSource {
        FeedbackSource::parse_or_default(self.source.as_deref())
    }
}

#[tracing::instrument(skip(state))]
pub(crate) async fn short_feedback(
    State(state): State<AppState>,
    Query(query): Query<FeedbackQuery>,
) -> Json<Vec<FeedbackItem>> {
    let items = state
        .feedback_service
        .short_feedback(
            &query.title,
            query.author(),
            query.source(),
            query.num.unwrap_or(DEFAULT_SHORT_FEEDBACK_COUNT),
            query.max_len.unwrap_or(DEFAULT_SNIPPET_MAX_LEN),
        )
        .await;
    Json(items)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FullFeedbackResponse {
    pub items: Vec<FeedbackItem>,
    pub cached: bool,
    pub fetched_at: DateTime<Utc>,
}

#[tracing::instrument(skip(state))]
pub(crate) async fn full_feedback(
    State(state): State<AppState>,
    Query(query): Query<FeedbackQuery>,
) -> Json<FullFeedbackResponse> {
    let key = FeedbackKey {
        title: query.title.clone(),
        author: query.author().to_string(),
        source: query.source(),
        num: query.num.unwrap_or(DEFAULT_FULL_FEEDBACK_COUNT),
    };

    if let Some(hit) = state.feedback_cache.get(&key) {
        debug!(source = %key.source, "full feedback served from cache");
        return Json(FullFeedbackResponse {
            items: hit.items,
            cached: true,
            fetched_at: hit.fetched_at,
        });
    }

    let items = state
        .feedback_service
        .full_feedback(&key.title, &key.author, key.source, key.num)
        .await;

    // Empty results are never cached so a failed upstream is retried next time.
    let fetched_at = if items.is_empty() {
        Utc::now()
    } else {
        state.feedback_cache.insert(key, items.clone()).fetched_at
    };

    Json(FullFeedbackResponse {
        items,
        cached: false,
        fetched_at,
    })
}

#[tracing::instrument]
pub(crate) async fn list_moods() -> Json<&'static [Mood]> {
    Json(moods())
}
