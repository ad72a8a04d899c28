//! Error types for the ALFAcoins API client.
//!
//! This module contains error types used while building a client:
//! credential validation, builder completeness, and the setup of the
//! HTTP transport and logging sinks.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Request-time failures live in
//! [`crate::clients::HttpError`].
//!
//! # Example
//!
//! ```rust
//! use alfacoins_api::{ConfigError, ShopName};
//!
//! let result = ShopName::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyShopName)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring an ALFAcoins client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Shop name cannot be empty.
    #[error("Shop name cannot be empty. Please provide the shop name assigned when the API was created.")]
    EmptyShopName,

    /// Secret key cannot be empty.
    #[error("Secret key cannot be empty. Please provide the secret key issued for the API.")]
    EmptySecretKey,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Expected an http(s) URL with a host (e.g., 'https://www.alfacoins.com/api/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The log file could not be opened for appending.
    #[error("Cannot open log file '{path}': {reason}")]
    LogFile {
        /// The path of the log file.
        path: String,
        /// The underlying I/O error message.
        reason: String,
    },

    /// The HTTP transport could not be initialised.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// The underlying transport error message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_shop_name_error_message() {
        let error = ConfigError::EmptyShopName;
        let message = error.to_string();
        assert!(message.contains("Shop name cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://example".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://example"));
        assert!(message.contains("Expected an http(s) URL"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "password" };
        let message = error.to_string();
        assert!(message.contains("password"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_log_file_error_includes_path() {
        let error = ConfigError::LogFile {
            path: "/nonexistent/alfacoins.log".to_string(),
            reason: "No such file or directory".to_string(),
        };
        assert!(error.to_string().contains("/nonexistent/alfacoins.log"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptySecretKey;
        let _: &dyn std::error::Error = &error;
    }
}
