use async_trait::async_trait;

use super::FetchError;
use super::books::Book;
use super::feedback::{FeedbackItem, FeedbackSource};

/// A book catalog that can be searched with a prepared search expression.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Return at most `max_results` books matching `query`.
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<Book>, FetchError>;
}

/// One third-party source of commentary about books.
///
/// Implementations return [`FetchError::NotConfigured`] without touching the
/// network when they have no credential.
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    fn source(&self) -> FeedbackSource;

    /// Fetch up to `num` untrimmed items for a free-text `query`.
    async fn fetch(&self, query: &str, num: usize) -> Result<Vec<FeedbackItem>, FetchError>;
}
