pub mod account;
pub mod booking;
pub mod bookings;
pub mod directory;
pub mod display;
pub mod search;

use crate::errors::RequestError;

/// Maps a non-2xx collaborator response to a `RequestError`, preferring the
/// service's own `{"error": ...}` message over the caller's fallback text.
pub(crate) async fn error_from_response(
    response: reqwest::Response,
    fallback: &str,
) -> RequestError {
    let status = response.status();
    let message = match response.json::<serde_json::Value>().await {
        Ok(body) => body
            .get("error")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string()),
        Err(_) => None,
    };
    match message {
        Some(message) => RequestError::Service(message),
        None => {
            tracing::warn!(%status, "service returned an unstructured error body");
            RequestError::Service(fallback.to_string())
        }
    }
}
