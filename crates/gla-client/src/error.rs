//! Errors returned by the plugin API client

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while talking to the plugin REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status code.
    #[error("{path} responded with HTTP {status}: {message}")]
    Status {
        status: u16,
        path: String,
        /// WordPress error code (e.g. `rest_forbidden`), when the body carried one
        code: Option<String>,
        message: String,
    },

    /// The request never produced a response.
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request body could not be serialized.
    #[error("failed to encode request body for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured site url cannot be used as an API base.
    #[error("invalid site url '{0}'")]
    InvalidBaseUrl(String),
}

/// Error body WordPress sends along with non-2xx responses
#[derive(Debug, Default, Deserialize)]
struct WpErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Build a status error from a raw error response body
    pub fn from_response(status: u16, path: impl Into<String>, body: &[u8]) -> Self {
        let parsed: WpErrorBody = serde_json::from_slice(body).unwrap_or_default();
        let message = parsed
            .message
            .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());

        ApiError::Status {
            status,
            path: path.into(),
            code: parsed.code,
            message,
        }
    }

    /// HTTP status code, when the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Authorization failures are expected while the session is still being
    /// established and are not surfaced to the merchant.
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_with_wordpress_body() {
        let body = br#"{"code":"rest_forbidden","message":"Sorry, you are not allowed to do that.","data":{"status":401}}"#;
        let err = ApiError::from_response(401, "/mc/settings", body);

        assert!(err.is_unauthorized());
        match err {
            ApiError::Status { code, message, .. } => {
                assert_eq!(code.as_deref(), Some("rest_forbidden"));
                assert_eq!(message, "Sorry, you are not allowed to do that.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_response_with_plain_body() {
        let err = ApiError::from_response(502, "/ads/campaigns", b"Bad Gateway\n");
        assert_eq!(err.status_code(), Some(502));
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "/ads/campaigns responded with HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_invalid_base_url_has_no_status() {
        let err = ApiError::InvalidBaseUrl("ftp://shop".to_string());
        assert_eq!(err.status_code(), None);
    }
}
