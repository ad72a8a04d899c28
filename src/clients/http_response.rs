//! HTTP response types for the ALFAcoins API client.
//!
//! This module provides [`ApiResponse`], the result of every API call.

use std::fmt;

use serde_json::Value;

/// A response from the ALFAcoins API.
///
/// The gateway signals most failures through an `error` field in the body
/// rather than the status code, so every status is represented the same way.
/// A body that is not valid JSON is kept apart in
/// [`ApiResponse::Unparseable`], so it is never confused with a legitimate
/// `null`, `false` or `0` body.
///
/// # Example
///
/// ```rust
/// use alfacoins_api::ApiResponse;
///
/// let response = ApiResponse::from_body(400, r#"{"error": "invalid currency"}"#.to_string());
/// assert!(response.is_parsed());
/// assert_eq!(response.error().and_then(|e| e.as_str()), Some("invalid currency"));
///
/// let response = ApiResponse::from_body(502, "<html>Bad Gateway</html>".to_string());
/// assert!(!response.is_parsed());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// The body was valid JSON.
    Parsed {
        /// The HTTP status code.
        code: u16,
        /// The parsed body.
        body: Value,
    },
    /// The body could not be parsed as JSON.
    Unparseable {
        /// The HTTP status code.
        code: u16,
        /// The body as received, decoded as UTF-8. Invalid sequences are
        /// replaced with U+FFFD.
        raw_body: String,
    },
}

impl ApiResponse {
    /// Classifies a raw response body.
    #[must_use]
    pub fn from_body(code: u16, raw_body: String) -> Self {
        match serde_json::from_str(&raw_body) {
            Ok(body) => Self::Parsed { code, body },
            Err(_) => Self::Unparseable { code, raw_body },
        }
    }

    /// Classifies a response body read as raw bytes.
    ///
    /// A body that is not valid UTF-8 cannot be JSON, so it is always
    /// [`ApiResponse::Unparseable`], with invalid sequences replaced by
    /// U+FFFD in `raw_body`.
    #[must_use]
    pub fn from_bytes(code: u16, bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(body) => Self::Parsed { code, body },
            Err(_) => Self::Unparseable {
                code,
                raw_body: String::from_utf8_lossy(bytes).into_owned(),
            },
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Parsed { code, .. } | Self::Unparseable { code, .. } => *code,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        let code = self.code();
        code >= 200 && code <= 299
    }

    /// Returns `true` if the body was valid JSON.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed { .. })
    }

    /// Returns the parsed body, if any.
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        match self {
            Self::Parsed { body, .. } => Some(body),
            Self::Unparseable { .. } => None,
        }
    }

    /// Consumes the response, returning the parsed body, if any.
    #[must_use]
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Parsed { body, .. } => Some(body),
            Self::Unparseable { .. } => None,
        }
    }

    /// Returns the raw body of an unparseable response.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Parsed { .. } => None,
            Self::Unparseable { raw_body, .. } => Some(raw_body),
        }
    }

    /// Looks up a top-level field of a parsed object body.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.json().and_then(|body| body.get(key))
    }

    /// Returns the gateway's `error` field, if the body carries one.
    #[must_use]
    pub fn error(&self) -> Option<&Value> {
        self.get("error")
    }

    /// Returns `true` if the body carries an `error` field.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error().is_some()
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed { body, .. } => write!(f, "{body}"),
            Self::Unparseable { code, .. } => write!(f, "Unparseable response (HTTP {code})"),
        }
    }
}
