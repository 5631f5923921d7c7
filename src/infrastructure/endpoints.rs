pub const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const SERPAPI_URL: &str = "https://serpapi.com/search.json";
pub const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
pub const NEWSAPI_URL: &str = "https://newsapi.org/v2/everything";
pub const REDDIT_SEARCH_URL: &str = "https://www.reddit.com/search.json";

/// Upstream URLs. Production uses the defaults; tests point them at a mock
/// server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub catalog: String,
    pub serpapi: String,
    pub youtube: String,
    pub news: String,
    pub reddit: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            catalog: GOOGLE_BOOKS_URL.to_string(),
            serpapi: SERPAPI_URL.to_string(),
            youtube: YOUTUBE_SEARCH_URL.to_string(),
            news: NEWSAPI_URL.to_string(),
            reddit: REDDIT_SEARCH_URL.to_string(),
        }
    }
}
