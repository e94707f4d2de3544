//! Error taxonomy for the data-access layer.
//!
//! Every failure that reaches a store is an [`ApiError`]. Its `Display`
//! output is the human-readable message a UI shows, so stores keep
//! `err.to_string()` in their `error` field and nothing else.

/// Errors produced by the HTTP collaborator and the request cache.
///
/// `ApiError` is `Clone` because one failure is shared with every caller
/// that joined the same in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
  /// Transport-level failure: DNS, connection refused, timeout, TLS.
  #[error("Network error: {0}")]
  Network(String),

  /// The server answered with a non-2xx status.
  #[error("Request failed ({status}): {message}")]
  Status { status: u16, message: String },

  /// The response decoded but did not have the expected shape.
  #[error("Unexpected response from server: {0}")]
  UnexpectedShape(String),

  /// The response body was not valid JSON for the expected type.
  #[error("Failed to decode response: {0}")]
  Decode(String),

  /// A cache key was reused for values of a different type.
  #[error("Cached value for '{key}' has an unexpected type")]
  CacheTypeMismatch { key: String },
}

impl ApiError {
  pub fn status(&self) -> Option<u16> {
    match self {
      ApiError::Status { status, .. } => Some(*status),
      _ => None,
    }
  }

  pub fn is_not_found(&self) -> bool {
    self.status() == Some(404)
  }
}

impl From<reqwest::Error> for ApiError {
  fn from(e: reqwest::Error) -> Self {
    if e.is_decode() {
      ApiError::Decode(e.to_string())
    } else if let Some(status) = e.status() {
      ApiError::Status {
        status: status.as_u16(),
        message: status
          .canonical_reason()
          .unwrap_or("unknown status")
          .to_string(),
      }
    } else {
      ApiError::Network(e.to_string())
    }
  }
}

impl From<serde_json::Error> for ApiError {
  fn from(e: serde_json::Error) -> Self {
    ApiError::Decode(e.to_string())
  }
}
