//! HTTP client for ALFAcoins API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the transport,
//! the credentials and the logger, and performs a single request.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, Params};
use crate::clients::http_response::ApiResponse;
use crate::config::{AlfacoinsConfig, BaseUrl, PasswordHash, SecretKey, ShopName};
use crate::error::ConfigError;
use crate::logging::Logger;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the ALFAcoins API.
///
/// The client handles:
/// - URL construction from the base URL and command
/// - Query-string encoding for GET requests
/// - Credential injection into POST bodies
/// - Reading error-status responses as ordinary responses
/// - Request and response logging
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every command is appended to.
    base_url: BaseUrl,
    shop_name: ShopName,
    secret_key: SecretKey,
    password_hash: PasswordHash,
    logger: Logger,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LogFile`] if a file log target cannot be
    /// opened, or [`ConfigError::HttpClient`] if the transport cannot be
    /// initialised.
    pub fn new(config: &AlfacoinsConfig) -> Result<Self, ConfigError> {
        let logger = config
            .logging()
            .map_or_else(|| Ok(Logger::disabled()), Logger::from_config)?;

        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("ALFAcoins API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(value) = HeaderValue::from_str(&user_agent) {
            default_headers.insert(USER_AGENT, value);
        }

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .default_headers(default_headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClient {
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            shop_name: config.shop_name().clone(),
            secret_key: config.secret_key().clone(),
            password_hash: config.password_hash().clone(),
            logger,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the logger for this client.
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Returns the full URL a request is sent to, including any query string.
    #[must_use]
    pub fn url_for(&self, request: &HttpRequest) -> String {
        let url = self.base_url.join(&request.command);
        match request.query_string() {
            Some(query) => format!("{url}?{query}"),
            None => url,
        }
    }

    /// Merges the credential fields into a copy of `params`.
    ///
    /// Credentials are inserted last, so they replace any caller values
    /// under the same keys.
    #[must_use]
    pub fn authenticate(&self, params: &Params) -> Params {
        let mut merged = params.clone();
        merged.insert(
            "name".to_string(),
            Value::String(self.shop_name.as_ref().to_string()),
        );
        merged.insert(
            "secret_key".to_string(),
            Value::String(self.secret_key.as_ref().to_string()),
        );
        merged.insert(
            "password".to_string(),
            Value::String(self.password_hash.as_ref().to_string()),
        );
        merged
    }

    /// Sends an HTTP request to the ALFAcoins API.
    ///
    /// The status code and body are read for every response, including
    /// 4xx and 5xx ones; the body is then classified by [`ApiResponse::from_bytes`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request cannot be sent or its
    /// body cannot be read.
    pub async fn request(&self, request: HttpRequest) -> Result<ApiResponse, HttpError> {
        let url = self.url_for(&request);
        let request_info = request.describe();
        self.logger.info(&request_info);

        let req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => {
                let body = Value::Object(self.authenticate(&request.params));
                self.client.post(&url).json(&body)
            }
        };

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let bytes = res.bytes().await?;

        let response_info = format!(
            "\nResponse code: {code}\nResponse body: {}",
            String::from_utf8_lossy(&bytes)
        );
        self.logger.debug(&response_info);

        let response = ApiResponse::from_bytes(code, &bytes);
        match &response {
            ApiResponse::Unparseable { .. } => {
                self.logger.error(&format!("{request_info}{response_info}"));
            }
            ApiResponse::Parsed { body, .. } if response.has_error() => {
                self.logger.warning(&body.to_string());
            }
            ApiResponse::Parsed { .. } => {}
        }
        self.logger.info(&response.to_string());

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_config() -> AlfacoinsConfig {
        AlfacoinsConfig::builder()
            .shop_name(ShopName::new("apicontest").unwrap())
            .secret_key(SecretKey::new("07fc884cf02af307400a9df4f2d15490").unwrap())
            .password("aIXncDlApUS4nexB")
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_with_defaults() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        assert_eq!(client.base_url().as_ref(), "https://www.alfacoins.com/api/");
        assert!(!client.logger().is_enabled());
    }

    #[test]
    fn test_url_for_get_without_params() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let request = HttpRequest::new(HttpMethod::Get, "fees", Params::new());
        assert_eq!(client.url_for(&request), "https://www.alfacoins.com/api/fees");
    }

    #[test]
    fn test_url_for_get_with_params() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let mut params = Params::new();
        params.insert("pair".to_string(), json!("BTC_USD"));
        params.insert("amount".to_string(), json!(2.0));
        let request = HttpRequest::new(HttpMethod::Get, "convert", params);
        assert_eq!(
            client.url_for(&request),
            "https://www.alfacoins.com/api/convert?pair=BTC_USD&amount=2.0"
        );
    }

    #[test]
    fn test_url_for_post_ignores_params() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let mut params = Params::new();
        params.insert("txn_id".to_string(), json!(1));
        let request = HttpRequest::new(HttpMethod::Post, "status", params);
        assert_eq!(client.url_for(&request), "https://www.alfacoins.com/api/status");
    }

    #[test]
    fn test_authenticate_adds_credentials() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let mut params = Params::new();
        params.insert("txn_id".to_string(), json!(12345));

        let merged = client.authenticate(&params);

        assert_eq!(merged.len(), 4);
        assert_eq!(merged.get("txn_id"), Some(&json!(12345)));
        assert_eq!(merged.get("name"), Some(&json!("apicontest")));
        assert_eq!(
            merged.get("secret_key"),
            Some(&json!("07fc884cf02af307400a9df4f2d15490"))
        );
        assert_eq!(
            merged.get("password"),
            Some(&json!(PasswordHash::from_raw("aIXncDlApUS4nexB").as_ref()))
        );
        // The caller's mapping is untouched
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_authenticate_credentials_win_on_collision() {
        let client = HttpClient::new(&create_test_config()).unwrap();
        let mut params = Params::new();
        params.insert("name".to_string(), json!("impostor"));
        params.insert("secret_key".to_string(), json!("guess"));
        params.insert("password".to_string(), json!("hunter2"));

        let merged = client.authenticate(&params);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("name"), Some(&json!("apicontest")));
        assert_eq!(
            merged.get("secret_key"),
            Some(&json!("07fc884cf02af307400a9df4f2d15490"))
        );
        assert_ne!(merged.get("password"), Some(&json!("hunter2")));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
