use thiserror::Error;

/// Failure of a fetch that produced no renderable payload.
///
/// Application-level errors reported by the API are not fetch errors; they
/// arrive as [`crate::model::Payload::Error`] and carry the upstream message.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request never completed (DNS, timeout, connection reset).
    #[error("Failed to reach WeatherAPI.com: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status whose body matched neither payload shape.
    #[error("WeatherAPI.com request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Success status, but the body matched neither payload shape.
    #[error("Unexpected response body from WeatherAPI.com: {0}")]
    UnexpectedBody(#[from] serde_json::Error),
}
