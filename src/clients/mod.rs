//! HTTP client types for ALFAcoins API communication.
//!
//! This module provides the HTTP layer underneath
//! [`AlfacoinsClient`](crate::AlfacoinsClient): building URLs and bodies,
//! injecting credentials, and classifying responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client owning transport, credentials and logger
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`ApiResponse`]: A parsed or unparseable response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`Params`]: The parameter mapping carried by a request
//!
//! # Error Statuses
//!
//! A 4xx or 5xx response is read and returned like a 2xx one; the gateway
//! reports failures in the body's `error` field. No request is retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{encode_params, to_params, HttpMethod, HttpRequest, Params};
pub use http_response::ApiResponse;
