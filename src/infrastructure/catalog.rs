use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::books::Book;
use crate::domain::errors::FetchError;
use crate::domain::repositories::CatalogRepository;
use crate::infrastructure::http::{CATALOG_TIMEOUT, get_json};

/// Google Books volume search.
#[derive(Clone)]
pub struct GoogleBooksCatalog {
    http: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl GoogleBooksCatalog {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            timeout: CATALOG_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl CatalogRepository for GoogleBooksCatalog {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<Book>, FetchError> {
        let request = self.http.get(&self.url).query(&[
            ("q", query.to_string()),
            ("maxResults", max_results.to_string()),
        ]);
        let response: VolumesResponse = get_json(request, self.timeout).await?;

        let limit = usize::try_from(max_results).unwrap_or(usize::MAX);
        Ok(response
            .items
            .into_iter()
            .take(limit)
            .map(|item| item.volume_info.into_book())
            .collect())
    }
}

// --- Google Books API types ---

#[derive(Debug, Default, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    #[serde(default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    subtitle: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
    description: Option<String>,
    #[serde(default)]
    image_links: ImageLinks,
    info_link: Option<String>,
    published_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageLinks {
    thumbnail: Option<String>,
    small_thumbnail: Option<String>,
}

impl VolumeInfo {
    fn into_book(self) -> Book {
        let description = non_empty(self.description)
            .or_else(|| non_empty(self.subtitle))
            .unwrap_or_default();
        let thumbnail =
            non_empty(self.image_links.thumbnail).or_else(|| non_empty(self.image_links.small_thumbnail));

        Book {
            title: self.title,
            authors: self.authors,
            description,
            thumbnail,
            info_link: self.info_link,
            published_date: self.published_date,
            feedback: None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
