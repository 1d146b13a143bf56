//! Error type returned by every API call.
use thiserror::Error;

/// Workspace-wide `Result` alias with `ApiError` as the default error.
pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL could not be parsed.
    #[error("invalid API url: {0}")]
    Url(#[from] url::ParseError),

    /// The base URL cannot carry path segments (e.g. `mailto:`).
    #[error("API url cannot be a base: {0}")]
    NotABase(String),

    /// Connection, TLS or body-read failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. `detail` carries the
    /// `{"detail": ...}` field of the body when the server sent one.
    #[error("server returned {status}{}", suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// The body was not the JSON shape the endpoint promises.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Server-provided explanation, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

fn suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Pull the `detail` field out of an error body.
///
/// ```json
/// { "detail": "Could not fetch data for the ticker." }
/// ```
///
/// Validation errors send `detail` as an array; those are kept as raw JSON.
pub(crate) fn error_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}
