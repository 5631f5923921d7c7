use std::sync::Arc;

use tracing::{info, warn};

use super::feedback::{DEFAULT_FULL_FEEDBACK_COUNT, FeedbackService};
use crate::domain::books::Book;
use crate::domain::feedback::feedback_query;
use crate::domain::query::search_expression;
use crate::domain::repositories::CatalogRepository;

pub const DEFAULT_MAX_RESULTS: i64 = 6;
pub const MAX_RESULTS_LIMIT: u32 = 40;

/// Clamp a requested result count to what the catalog accepts. Zero and
/// negative counts become 1.
pub fn clamp_max_results(requested: i64) -> u32 {
    let clamped = requested.clamp(1, i64::from(MAX_RESULTS_LIMIT));
    u32::try_from(clamped).unwrap_or(MAX_RESULTS_LIMIT)
}

#[derive(Clone)]
pub struct BookService {
    catalog: Arc<dyn CatalogRepository>,
    feedback: FeedbackService,
}

impl BookService {
    pub fn new(catalog: Arc<dyn CatalogRepository>, feedback: FeedbackService) -> Self {
        Self { catalog, feedback }
    }

    /// Search the catalog for books matching a mood and/or author.
    ///
    /// With `include_feedback`, every titled result also gets commentary from
    /// all sources attached. A failing catalog yields an empty list.
    pub async fn search_books(
        &self,
        emotion: Option<&str>,
        author: Option<&str>,
        max_results: i64,
        include_feedback: bool,
    ) -> Vec<Book> {
        let query = search_expression(emotion, author);
        let max_results = clamp_max_results(max_results);

        let mut books = match self.catalog.search(&query, max_results).await {
            Ok(books) => books,
            Err(err) => {
                warn!(query = %query, error = %err, "catalog search failed");
                return Vec::new();
            }
        };
        info!(query = %query, count = books.len(), "catalog search complete");

        if include_feedback {
            for book in &mut books {
                let Some(title) = book.title.as_deref() else {
                    continue;
                };
                let query = feedback_query(title, book.first_author().unwrap_or_default());
                book.feedback = Some(
                    self.feedback
                        .all_sources(&query, DEFAULT_FULL_FEEDBACK_COUNT)
                        .await,
                );
            }
        }

        books
    }
}
