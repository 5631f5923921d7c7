use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::domain::FetchError;

pub const USER_AGENT: &str = "Moodshelf/1.0";

pub const CATALOG_TIMEOUT: Duration = Duration::from_secs(10);
pub const FEEDBACK_TIMEOUT: Duration = Duration::from_secs(8);

/// Per-request timeouts for outbound calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub catalog: Duration,
    pub feedback: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            catalog: CATALOG_TIMEOUT,
            feedback: FEEDBACK_TIMEOUT,
        }
    }
}

/// Send a GET and decode the JSON body, mapping every failure to a
/// [`FetchError`]. Non-2xx responses are not decoded.
pub(crate) async fn get_json<T>(
    request: reqwest::RequestBuilder,
    timeout: Duration,
) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    let response = request
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Build the shared outbound client. Timeouts are set per request.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().user_agent(USER_AGENT).build()
}
