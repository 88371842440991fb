//! Error types for the PingAccess administrative client.
//!
//! # Design
//! Failures fall into four buckets: the input could not be serialized, the
//! HTTP exchange never completed, the server answered with a non-2xx status,
//! or a 2xx body did not match the expected model. The last two keep the raw
//! `HttpResponse` so callers can still look at the status code and body.
//! Nothing here retries or interprets PingAccess error payloads on its own;
//! `error_body` is a convenience for callers that want to.

use thiserror::Error;

use crate::http::HttpResponse;
use crate::types::ApiErrorView;

/// Boxed error returned by transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by request execution.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The HTTP call itself did not complete (DNS, connect, TLS, I/O).
    #[error("{operation}: transport failure: {source}")]
    Transport {
        operation: String,
        #[source]
        source: BoxError,
    },

    /// The server returned a status outside 2xx.
    #[error("{operation}: HTTP {}: {}", .response.status, .response.body)]
    Status {
        operation: String,
        response: HttpResponse,
    },

    /// A 2xx body could not be deserialized into the expected type.
    #[error("{operation}: decoding HTTP {} response failed: {source}", .response.status)]
    Decode {
        operation: String,
        #[source]
        source: serde_json::Error,
        response: HttpResponse,
    },
}

impl ApiError {
    /// The raw response, when the exchange got that far.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            ApiError::Status { response, .. } | ApiError::Decode { response, .. } => Some(response),
            ApiError::Serialization(_) | ApiError::Transport { .. } => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { response, .. } if response.status == 404)
    }

    /// Best-effort parse of a PingAccess error payload from a non-2xx body.
    pub fn error_body(&self) -> Option<ApiErrorView> {
        match self {
            ApiError::Status { response, .. } => response.json().ok(),
            _ => None,
        }
    }
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required setting {0} is not set")]
    Missing(&'static str),

    #[error("{name} must be a boolean, got {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16, body: &str) -> ApiError {
        ApiError::Status {
            operation: "GetUserCommand".to_string(),
            response: HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            },
        }
    }

    #[test]
    fn status_error_message_carries_code_and_body() {
        let err = status_error(404, r#"{"message":"not found"}"#);
        let msg = err.to_string();
        assert!(msg.contains("404"), "{msg}");
        assert!(msg.contains("not found"), "{msg}");
        assert!(msg.starts_with("GetUserCommand"), "{msg}");
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn error_body_parses_pingaccess_payload() {
        let err = status_error(
            422,
            r#"{"message":"Save Failed","flash":["Invalid name"],"form":{"name":["required"]}}"#,
        );
        let body = err.error_body().unwrap();
        assert_eq!(body.message.as_deref(), Some("Save Failed"));
        assert_eq!(body.flash, vec!["Invalid name".to_string()]);
        assert_eq!(body.form["name"], vec!["required".to_string()]);
        assert!(!err.is_not_found());
    }

    #[test]
    fn error_body_is_none_for_non_json() {
        let err = status_error(500, "<html>oops</html>");
        assert!(err.error_body().is_none());
    }

    #[test]
    fn transport_error_has_no_response() {
        let err = ApiError::Transport {
            operation: "GetLicenseCommand".to_string(),
            source: "connection refused".into(),
        };
        assert!(err.response().is_none());
        assert!(err.to_string().contains("connection refused"));
    }
}
