//! Shared HTTP response helpers.
//!
//! Maps status codes onto [`ApiError`] and performs the 401 session
//! teardown, so resource modules stay focused on request construction.

use lexa_auth::SessionContext;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, GENERIC_MESSAGE};

/// Header some endpoints use to explain a refusal.
pub const ERROR_MESSAGE_HEADER: &str = "x-error-message";

/// Check a response for error statuses. Returns it unchanged on success.
///
/// - **401** → session invalidated, then [`ApiError::Unauthorized`]
/// - **403** → [`ApiError::Forbidden`]
/// - **404** → [`ApiError::NotFound`]
/// - **5xx** → [`ApiError::ServerError`]
/// - anything else non-2xx → [`ApiError::Api`]
pub async fn check_response(
    resp: reqwest::Response,
    session: &SessionContext,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        session.invalidate();
        return Err(ApiError::Unauthorized);
    }

    let header = resp
        .headers()
        .get(ERROR_MESSAGE_HEADER)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
    let body = resp.text().await.unwrap_or_default();
    let message = header
        .filter(|h| !h.trim().is_empty())
        .or_else(|| message_from_body(&body))
        .unwrap_or_else(|| GENERIC_MESSAGE.to_string());

    tracing::debug!(status = status.as_u16(), %message, "request failed");
    Err(match status.as_u16() {
        403 => ApiError::Forbidden { message },
        404 => ApiError::NotFound { message },
        code if code >= 500 => ApiError::ServerError {
            status: code,
            message,
        },
        code => ApiError::Api {
            status: code,
            message,
        },
    })
}

/// `message` (or `error`) from a JSON error body, else a short plain-text body.
fn message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return ["message", "error"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string);
    }
    (trimmed.len() <= 200 && !trimmed.starts_with('<')).then(|| trimmed.to_string())
}

/// Read and decode a JSON body, naming the endpoint on failure.
pub async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let url = resp.url().path().to_string();
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("{url}: {e}")))
}

/// Append an encoded query string to `path`.
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect();
    format!("{path}?{}", query.join("&"))
}

/// Percent-encode one path segment.
pub fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
