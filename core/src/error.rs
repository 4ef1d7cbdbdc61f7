//! The one error shape every failed call resolves to.
//!
//! # Design
//! Consumers render failures directly, so the error is data first:
//! `{message, code, status, data}`. Local rejections, transport failures and
//! HTTP statuses all map into it; nothing else crosses the client boundary.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::http::HttpResponse;

/// Machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Refused locally by the rate limiter; never hit the network.
    RateLimitExceeded,
    Timeout,
    /// No response at all.
    NetworkError,
    /// The backend answered with this non-2xx status.
    Http(u16),
    /// The request payload could not be encoded.
    InvalidRequest,
    /// A 2xx body did not decode into the expected type.
    InvalidResponse,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::RateLimitExceeded => f.write_str("RATE_LIMIT_EXCEEDED"),
            ErrorCode::Timeout => f.write_str("TIMEOUT"),
            ErrorCode::NetworkError => f.write_str("NETWORK_ERROR"),
            ErrorCode::Http(status) => write!(f, "HTTP_{status}"),
            ErrorCode::InvalidRequest => f.write_str("INVALID_REQUEST"),
            ErrorCode::InvalidResponse => f.write_str("INVALID_RESPONSE"),
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Normalized client error.
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    pub code: ErrorCode,
    /// HTTP status, or the conventional stand-in (408 timeout, 0 no response).
    pub status: u16,
    /// Server-supplied detail such as validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiError {
    pub fn new(code: ErrorCode, status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            status,
            data: None,
        }
    }

    pub fn rate_limited(remaining: u32) -> Self {
        Self::new(
            ErrorCode::RateLimitExceeded,
            429,
            format!("Too many requests. Please wait a moment and try again ({remaining} requests remaining)."),
        )
    }

    pub fn timeout() -> Self {
        Self::new(
            ErrorCode::Timeout,
            408,
            "The request timed out. Please check your connection and try again.",
        )
    }

    pub fn network() -> Self {
        Self::new(
            ErrorCode::NetworkError,
            0,
            "Unable to reach the server. Please check your internet connection.",
        )
    }

    pub fn invalid_request(detail: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InvalidRequest, 0, format!("Could not encode request: {detail}"))
    }

    pub fn invalid_response(status: u16, detail: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::InvalidResponse,
            status,
            format!("Unexpected response from server: {detail}"),
        )
    }

    /// Classify a non-2xx response.
    ///
    /// A `message` (or `error`) string in a JSON body wins over the default
    /// text for the status; the parsed body travels along in `data`.
    pub fn from_response(response: &HttpResponse) -> Self {
        let data = parse_body(&response.body);
        let message = data
            .as_ref()
            .and_then(server_message)
            .unwrap_or_else(|| default_message(response.status));
        Self {
            message,
            code: ErrorCode::Http(response.status),
            status: response.status,
            data,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        self.code == ErrorCode::RateLimitExceeded
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == ErrorCode::Http(401)
    }
}

/// Default user-facing text per status.
pub fn default_message(status: u16) -> String {
    match status {
        400 => "Bad request. Please check your input and try again.".to_string(),
        401 => "Your session has expired. Please log in again.".to_string(),
        403 => "You do not have permission to perform this action.".to_string(),
        404 => "The requested resource was not found.".to_string(),
        409 => "This action conflicts with existing data.".to_string(),
        422 => "Validation failed. Please check the highlighted fields.".to_string(),
        429 => "Too many requests. Please slow down and try again later.".to_string(),
        500 => "Internal server error. Please try again later.".to_string(),
        503 => "Service temporarily unavailable. Please try again later.".to_string(),
        other => format!("Request failed with status {other}."),
    }
}

fn parse_body(body: &str) -> Option<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(trimmed.to_string())))
}

fn server_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|field| body.get(field).and_then(Value::as_str))
        .map(str::trim)
        .find(|m| !m.is_empty())
        .map(str::to_string)
}

/// Failure below HTTP: no response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("timed out: {0}")]
    Timeout(String),
    #[error("network failure: {0}")]
    Network(String),
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout(_) => ApiError::timeout(),
            TransportError::Network(_) => ApiError::network(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn codes_render_as_wire_strings() {
        assert_eq!(ErrorCode::RateLimitExceeded.to_string(), "RATE_LIMIT_EXCEEDED");
        assert_eq!(ErrorCode::Timeout.to_string(), "TIMEOUT");
        assert_eq!(ErrorCode::NetworkError.to_string(), "NETWORK_ERROR");
        assert_eq!(ErrorCode::Http(418).to_string(), "HTTP_418");
    }

    #[test]
    fn serializes_to_flat_shape() {
        let err = ApiError::from_response(&response(422, r#"{"message":"Name is required","errors":{"name":"required"}}"#));
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(
            value,
            json!({
                "message": "Name is required",
                "code": "HTTP_422",
                "status": 422,
                "data": {"message": "Name is required", "errors": {"name": "required"}}
            })
        );
    }

    #[test]
    fn data_is_omitted_when_absent() {
        let value = serde_json::to_value(ApiError::timeout()).unwrap();
        assert_eq!(value["code"], "TIMEOUT");
        assert_eq!(value["status"], 408);
        assert!(value.get("data").is_none());
    }

    #[test]
    fn server_message_preferred_over_default() {
        let err = ApiError::from_response(&response(404, r#"{"message":"Pet not found"}"#));
        assert_eq!(err.message, "Pet not found");
        assert_eq!(err.code, ErrorCode::Http(404));
    }

    #[test]
    fn error_field_used_when_message_missing() {
        let err = ApiError::from_response(&response(400, r#"{"error":"bad id"}"#));
        assert_eq!(err.message, "bad id");
    }

    #[test]
    fn blank_or_non_string_message_falls_back() {
        let err = ApiError::from_response(&response(409, r#"{"message":"  "}"#));
        assert_eq!(err.message, default_message(409));
        let err = ApiError::from_response(&response(500, r#"{"message":42}"#));
        assert_eq!(err.message, default_message(500));
    }

    #[test]
    fn plain_text_body_becomes_string_data() {
        let err = ApiError::from_response(&response(502, "Bad Gateway"));
        assert_eq!(err.message, "Request failed with status 502.");
        assert_eq!(err.data, Some(Value::String("Bad Gateway".to_string())));
    }

    #[test]
    fn empty_body_has_no_data() {
        let err = ApiError::from_response(&response(503, ""));
        assert_eq!(err.message, default_message(503));
        assert!(err.data.is_none());
    }

    #[test]
    fn rate_limit_message_includes_remaining() {
        let err = ApiError::rate_limited(0);
        assert_eq!(err.status, 429);
        assert!(err.message.contains("0 requests remaining"));
        assert!(err.is_rate_limited());
    }

    #[test]
    fn transport_errors_convert() {
        let err: ApiError = TransportError::Timeout("30s".to_string()).into();
        assert_eq!((err.code, err.status), (ErrorCode::Timeout, 408));
        let err: ApiError = TransportError::Network("refused".to_string()).into();
        assert_eq!((err.code, err.status), (ErrorCode::NetworkError, 0));
    }

    #[test]
    fn display_is_the_message() {
        assert_eq!(ApiError::network().to_string(), ApiError::network().message);
    }
}
