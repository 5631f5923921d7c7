use std::sync::Arc;
use std::time::Duration;

use crate::application::cache::{FULL_FEEDBACK_CAPACITY, FULL_FEEDBACK_TTL, FeedbackCache};
use crate::application::services::{BookService, FeedbackService};
use crate::domain::repositories::CatalogRepository;
use crate::infrastructure::catalog::GoogleBooksCatalog;
use crate::infrastructure::credentials::Credentials;
use crate::infrastructure::endpoints::Endpoints;
use crate::infrastructure::feedback::feedback_repositories;
use crate::infrastructure::http::Timeouts;

/// Everything that varies between production and test environments.
/// Adapters and services are created from it.
pub struct AppStateConfig {
    pub endpoints: Endpoints,
    pub credentials: Credentials,
    pub timeouts: Timeouts,
    pub feedback_cache_ttl: Duration,
    pub feedback_cache_capacity: usize,
}

impl Default for AppStateConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            credentials: Credentials::default(),
            timeouts: Timeouts::default(),
            feedback_cache_ttl: FULL_FEEDBACK_TTL,
            feedback_cache_capacity: FULL_FEEDBACK_CAPACITY,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub book_service: BookService,
    pub feedback_service: FeedbackService,
    pub feedback_cache: Arc<FeedbackCache>,
}

impl AppState {
    /// Build the application state around a shared HTTP client.
    pub fn new(http: &reqwest::Client, config: AppStateConfig) -> Self {
        let catalog: Arc<dyn CatalogRepository> = Arc::new(
            GoogleBooksCatalog::new(http.clone(), config.endpoints.catalog.clone())
                .with_timeout(config.timeouts.catalog),
        );
        let feedback_service = FeedbackService::new(feedback_repositories(
            http,
            &config.endpoints,
            &config.credentials,
            config.timeouts.feedback,
        ));
        let book_service = BookService::new(catalog, feedback_service.clone());

        Self {
            book_service,
            feedback_service,
            feedback_cache: Arc::new(
                FeedbackCache::new(config.feedback_cache_ttl)
                    .with_capacity(config.feedback_cache_capacity),
            ),
        }
    }
}
