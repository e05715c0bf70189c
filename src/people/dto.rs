use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Error body returned for conflicts and unexpected failures.
#[derive(Debug, Serialize)]
pub struct ExceptionResponse {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub message: String,
    pub details: String, // "uri=<path>"
}

impl ExceptionResponse {
    pub fn new(message: impl Into<String>, path: &str) -> Self {
        Self {
            timestamp: OffsetDateTime::now_utc(),
            message: message.into(),
            details: format!("uri={}", path),
        }
    }
}

/// Query string for `GET /person/search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameQuery {
    pub first_name: String,
    pub last_name: String,
}
