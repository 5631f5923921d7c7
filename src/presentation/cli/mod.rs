use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use crate::infrastructure::endpoints::{
    Endpoints, GOOGLE_BOOKS_URL, NEWSAPI_URL, REDDIT_SEARCH_URL, SERPAPI_URL, YOUTUBE_SEARCH_URL,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Find books for your mood and see what people say about them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve(ServeCommand),
}

/// Feedback API keys are read from `SERPAPI_KEY`, `YOUTUBE_API_KEY`,
/// `NEWS_API_KEY` and `REDDIT_USER_AGENT` (each optionally numbered `_1`..`_9`).
#[derive(Debug, Args)]
pub struct ServeCommand {
    #[arg(long, env = "MOODSHELF_BIND_ADDRESS", default_value = "127.0.0.1:3000")]
    pub bind_address: SocketAddr,

    #[arg(long, env = "MOODSHELF_CATALOG_URL", default_value = GOOGLE_BOOKS_URL)]
    pub catalog_url: String,

    #[arg(long, env = "MOODSHELF_SERPAPI_URL", default_value = SERPAPI_URL)]
    pub serpapi_url: String,

    #[arg(long, env = "MOODSHELF_YOUTUBE_URL", default_value = YOUTUBE_SEARCH_URL)]
    pub youtube_url: String,

    #[arg(long, env = "MOODSHELF_NEWS_URL", default_value = NEWSAPI_URL)]
    pub news_url: String,

    #[arg(long, env = "MOODSHELF_REDDIT_URL", default_value = REDDIT_SEARCH_URL)]
    pub reddit_url: String,
}

impl ServeCommand {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            catalog: self.catalog_url.clone(),
            serpapi: self.serpapi_url.clone(),
            youtube: self.youtube_url.clone(),
            news: self.news_url.clone(),
            reddit: self.reddit_url.clone(),
        }
    }
}
