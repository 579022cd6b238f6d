//! Story document download.

use flipbook_core::{parse_story, ContentError, ContentItem};
use gloo::net::http::Request;

/// Fetch and decode the story document at `url`. No retries.
pub async fn fetch_story(url: &str) -> Result<Vec<ContentItem>, ContentError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|error| ContentError::Network(error.to_string()))?;

    if !response.ok() {
        return Err(ContentError::Status {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|error| ContentError::Network(error.to_string()))?;
    parse_story(&body)
}
