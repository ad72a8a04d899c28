//! HTTP-specific error types for the ALFAcoins API client.
//!
//! # Error Handling
//!
//! The gateway reports most failures in the response body, so HTTP error
//! statuses are *not* errors here: a 4xx/5xx response is returned like any
//! other. Only two things fail a request:
//!
//! - [`InvalidHttpRequestError`]: the request was rejected before sending
//! - [`HttpError::Network`]: the transport itself failed
//!
//! # Example
//!
//! ```rust,ignore
//! use alfacoins_api::{ApiResponse, HttpError};
//!
//! match client.get_fees().await {
//!     Ok(ApiResponse::Parsed { body, .. }) => println!("Fees: {body}"),
//!     Ok(ApiResponse::Unparseable { raw_body, .. }) => println!("Garbled: {raw_body}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use alfacoins_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::InvalidMethod {
///     method: "delete".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Wrong request method 'delete'. Expected GET or POST.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The HTTP method is neither GET nor POST.
    #[error("Wrong request method '{method}'. Expected GET or POST.")]
    InvalidMethod {
        /// The invalid method that was provided.
        method: String,
    },

    /// The request parameters do not form a JSON object.
    #[error("Invalid request parameters: {reason}")]
    InvalidParams {
        /// Why the parameters were rejected.
        reason: String,
    },

    /// An identifier could not be converted to an integer.
    #[error("Invalid {field} '{value}'. Expected an integer.")]
    InvalidIdentifier {
        /// The parameter the identifier was meant for.
        field: &'static str,
        /// The value that was provided.
        value: String,
    },
}

/// Unified error type for all request failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed; nothing was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
