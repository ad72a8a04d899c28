//! HTTP request types for the ALFAcoins API client.
//!
//! This module provides the [`HttpRequest`] type, the [`Params`] mapping
//! carried by every request, and the query-string encoding used for GET
//! requests and request logging.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// Request parameters: string keys to JSON values, in insertion order.
pub type Params = serde_json::Map<String, Value>;

/// HTTP methods supported by the ALFAcoins API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Parameters travel in the query string.
    Get,
    /// Parameters travel in an authenticated JSON body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

impl FromStr for HttpMethod {
    type Err = InvalidHttpRequestError;

    /// Parses `get` or `post`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("get") {
            Ok(Self::Get)
        } else if s.eq_ignore_ascii_case("post") {
            Ok(Self::Post)
        } else {
            Err(InvalidHttpRequestError::InvalidMethod {
                method: s.to_string(),
            })
        }
    }
}

/// An HTTP request to be sent to the ALFAcoins API.
///
/// # Example
///
/// ```rust
/// use alfacoins_api::clients::{HttpMethod, HttpRequest, Params};
/// use serde_json::json;
///
/// let mut params = Params::new();
/// params.insert("pair".to_string(), json!("BTC_USD"));
/// params.insert("amount".to_string(), json!(1.5));
///
/// let request = HttpRequest::new(HttpMethod::Get, "convert", params);
/// assert_eq!(request.query_string().as_deref(), Some("pair=BTC_USD&amount=1.5"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The command path, relative to the API base URL.
    pub command: String,
    /// Caller-supplied parameters, without credentials.
    pub params: Params,
}

impl HttpRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(http_method: HttpMethod, command: impl Into<String>, params: Params) -> Self {
        Self {
            http_method,
            command: command.into(),
            params,
        }
    }

    /// Returns the query string for a GET request with parameters.
    ///
    /// POST requests and parameterless GET requests have no query string.
    #[must_use]
    pub fn query_string(&self) -> Option<String> {
        match self.http_method {
            HttpMethod::Get if !self.params.is_empty() => Some(encode_params(&self.params)),
            _ => None,
        }
    }

    /// Describes the request for the log: method, command and encoded parameters.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut description = format!("Requested: {} /{}", self.http_method, self.command);
        if !self.params.is_empty() {
            description.push_str("\nParameters(encoded): ");
            description.push_str(&encode_params(&self.params));
        }
        description
    }
}

/// Form-encodes parameters as `key=value` pairs joined by `&`.
///
/// Keys and values are percent-encoded with spaces written as `+`. String
/// values are encoded as-is; other values are encoded as their compact JSON
/// text.
#[must_use]
pub fn encode_params(params: &Params) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_value(value: &Value) -> String {
    match value {
        Value::String(s) => encode_component(s),
        other => encode_component(&other.to_string()),
    }
}

fn encode_component(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}

/// Converts any serializable value into request parameters.
///
/// `()` and `None` become empty parameters.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::InvalidParams`] if the value does not
/// serialize to a JSON object.
pub fn to_params<P>(params: &P) -> Result<Params, InvalidHttpRequestError>
where
    P: Serialize + ?Sized,
{
    let value = serde_json::to_value(params).map_err(|e| InvalidHttpRequestError::InvalidParams {
        reason: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(InvalidHttpRequestError::InvalidParams {
            reason: format!("expected a JSON object, got {other}"),
        }),
    }
}
