use std::fmt;

use rand::seq::IndexedRandom;

/// Highest numbered suffix read for a credential prefix (`PREFIX_1` .. `PREFIX_9`).
pub const MAX_CREDENTIAL_SUFFIX: usize = 9;

pub const SERPAPI_KEY_PREFIX: &str = "SERPAPI_KEY";
pub const YOUTUBE_KEY_PREFIX: &str = "YOUTUBE_API_KEY";
pub const NEWS_KEY_PREFIX: &str = "NEWS_API_KEY";
pub const REDDIT_USER_AGENT_PREFIX: &str = "REDDIT_USER_AGENT";

/// User agent sent to reddit when none is configured.
pub const DEFAULT_REDDIT_USER_AGENT: &str = "book-recommender/0.1";

/// The configured values for one credential prefix. One is chosen at random
/// per request to spread load across keys.
#[derive(Clone, Default)]
pub struct CredentialPool {
    values: Vec<String>,
}

impl CredentialPool {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(Into::into)
                .filter(|v: &String| !v.is_empty())
                .collect(),
        }
    }

    /// Read `PREFIX`, `PREFIX_1`, … `PREFIX_9` from the process environment.
    pub fn from_env(prefix: &str) -> Self {
        Self::from_lookup(prefix, |name| std::env::var(name).ok())
    }

    /// Read `PREFIX`, `PREFIX_1`, … `PREFIX_9` through `lookup`, skipping
    /// unset and empty values.
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let names = std::iter::once(prefix.to_string())
            .chain((1..=MAX_CREDENTIAL_SUFFIX).map(|i| format!("{prefix}_{i}")));
        Self::new(names.filter_map(|name| lookup(&name)))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Choose one value uniformly at random, or `None` if nothing is configured.
    pub fn pick(&self) -> Option<&str> {
        self.values.choose(&mut rand::rng()).map(String::as_str)
    }
}

impl fmt::Debug for CredentialPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialPool")
            .field("configured", &self.values.len())
            .finish()
    }
}

/// Credentials for every feedback source, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub serpapi: CredentialPool,
    pub youtube: CredentialPool,
    pub news: CredentialPool,
    pub reddit_user_agent: CredentialPool,
}

impl Credentials {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            serpapi: CredentialPool::from_lookup(SERPAPI_KEY_PREFIX, &lookup),
            youtube: CredentialPool::from_lookup(YOUTUBE_KEY_PREFIX, &lookup),
            news: CredentialPool::from_lookup(NEWS_KEY_PREFIX, &lookup),
            reddit_user_agent: CredentialPool::from_lookup(REDDIT_USER_AGENT_PREFIX, &lookup),
        }
    }
}
