use thiserror::Error;

/// Why an upstream fetch produced nothing.
///
/// These never reach callers of the public operations, which see an empty
/// list instead; they exist so failures can be logged at the right level.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no credential configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether this is an expected skip rather than an actual failure.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, FetchError::NotConfigured)
    }
}
