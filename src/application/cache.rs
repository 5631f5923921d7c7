use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::domain::feedback::{FeedbackItem, FeedbackSource};

/// How long full feedback is reused before asking the source again.
pub const FULL_FEEDBACK_TTL: Duration = Duration::from_secs(30 * 60);

/// Upper bound on cached entries; the oldest is evicted past it.
pub const FULL_FEEDBACK_CAPACITY: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackKey {
    pub title: String,
    pub author: String,
    pub source: FeedbackSource,
    pub num: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedFeedback {
    pub items: Vec<FeedbackItem>,
    pub fetched_at: DateTime<Utc>,
}

struct Entry {
    value: CachedFeedback,
    stored: Instant,
}

/// Expiring map of full-feedback results.
///
/// Advisory only: entries may be dropped at any time and callers must be
/// able to fetch again.
pub struct FeedbackCache {
    entries: Mutex<HashMap<FeedbackKey, Entry>>,
    ttl: Duration,
    capacity: usize,
}

impl FeedbackCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            capacity: FULL_FEEDBACK_CAPACITY,
        }
    }

    /// Keep at most `capacity` entries (minimum one).
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn get(&self, key: &FeedbackKey) -> Option<CachedFeedback> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        match entries.get(key) {
            Some(entry) if entry.stored.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Store `items` under `key`, sweeping anything that has expired and
    /// evicting the oldest entry when full.
    pub fn insert(&self, key: FeedbackKey, items: Vec<FeedbackItem>) -> CachedFeedback {
        let value = CachedFeedback {
            items,
            fetched_at: Utc::now(),
        };

        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let ttl = self.ttl;
        entries.retain(|_, entry| entry.stored.elapsed() < ttl);
        if !entries.contains_key(&key) && entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.stored)
                .map(|(stale, _)| stale.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
            }
        }
        entries.insert(
            key,
            Entry {
                value: value.clone(),
                stored: Instant::now(),
            },
        );

        value
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FeedbackCache {
    fn default() -> Self {
        Self::new(FULL_FEEDBACK_TTL)
    }
}
