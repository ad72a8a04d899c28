//! The ALFAcoins API client.
//!
//! [`AlfacoinsClient`] holds the credentials for one shop and exposes the
//! generic [`request`](AlfacoinsClient::request) operation plus one method
//! per gateway endpoint:
//!
//! | Method | HTTP | Command |
//! |---|---|---|
//! | [`create_order`](AlfacoinsClient::create_order) | POST | `create` |
//! | [`create_test_order`](AlfacoinsClient::create_test_order) | POST | `create` |
//! | [`order_status`](AlfacoinsClient::order_status) | POST | `status` |
//! | [`refund_order`](AlfacoinsClient::refund_order) | POST | `refund` |
//! | [`bitsend`](AlfacoinsClient::bitsend) | POST | `bitsend` |
//! | [`bitsend_status`](AlfacoinsClient::bitsend_status) | POST | `bitsend_status` |
//! | [`get_stats`](AlfacoinsClient::get_stats) | POST | `stats` |
//! | [`get_fees`](AlfacoinsClient::get_fees) | GET | `fees` |
//! | [`rate`](AlfacoinsClient::rate) | GET | `rate/{from}_{to}.json` |
//! | [`get_rates`](AlfacoinsClient::get_rates) | GET | `rates` |
//! | [`convert`](AlfacoinsClient::convert) | GET | `convert` |
//!
//! Endpoint methods only assemble parameters; the gateway validates them.

mod bitsend;
mod merchant;
mod orders;
mod params;
mod rates;

pub use params::{IntoIdentifier, OrderOptions, OrderRequest, TestOrder};

use crate::clients::{ApiResponse, HttpClient, HttpError, HttpMethod, HttpRequest, Params};
use crate::config::{
    AlfacoinsConfig, BaseUrl, LoggingConfig, PasswordHash, SecretKey, ShopName,
};
use crate::error::ConfigError;

/// Client for the ALFAcoins payment gateway.
///
/// Credentials are fixed at construction. Every POST request carries them
/// in its JSON body; GET requests are unauthenticated.
///
/// # Thread Safety
///
/// `AlfacoinsClient` is `Send + Sync`; concurrent calls are independent
/// requests.
///
/// # Example
///
/// ```rust,ignore
/// use alfacoins_api::{AlfacoinsClient, OrderRequest};
///
/// let client = AlfacoinsClient::new("apicontest", "07fc884cf02af307400a9df4f2d15490", "aIXncDlApUS4nexB", None)?;
///
/// let order = client
///     .create_order(&OrderRequest {
///         coin_type: "bitcoin".to_string(),
///         amount: 1.23412341,
///         order_id: "Order10001".to_string(),
///         currency: "USD".to_string(),
///         description: "Payment for t-shirt ALFAcoins size XXL".to_string(),
///         options: None,
///     })
///     .await?;
///
/// println!("Pay to {:?}", order.get("address"));
/// ```
#[derive(Debug)]
pub struct AlfacoinsClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    shop_name: ShopName,
    password_hash: PasswordHash,
}

// Verify AlfacoinsClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AlfacoinsClient>();
};

impl AlfacoinsClient {
    /// Creates a client for the production API.
    ///
    /// # Arguments
    ///
    /// * `shop_name` - Shop name assigned when the API was created
    /// * `secret_key` - Secret key issued for the API
    /// * `password` - Raw API password; only its digest is kept
    /// * `logging` - Logging options, or `None` to disable logging
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a credential is empty, a log file cannot
    /// be opened, or the transport cannot be initialised.
    pub fn new(
        shop_name: impl Into<String>,
        secret_key: impl Into<String>,
        password: &str,
        logging: Option<LoggingConfig>,
    ) -> Result<Self, ConfigError> {
        let mut builder = AlfacoinsConfig::builder()
            .shop_name(ShopName::new(shop_name)?)
            .secret_key(SecretKey::new(secret_key)?)
            .password(password);
        if let Some(logging) = logging {
            builder = builder.logging(logging);
        }
        Self::from_config(&builder.build()?)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a log file cannot be opened or the
    /// transport cannot be initialised.
    pub fn from_config(config: &AlfacoinsConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            shop_name: config.shop_name().clone(),
            password_hash: config.password_hash().clone(),
        })
    }

    /// Returns the shop name.
    #[must_use]
    pub const fn shop_name(&self) -> &ShopName {
        &self.shop_name
    }

    /// Returns the password digest sent with authenticated requests.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.http_client.base_url()
    }

    /// Returns `true` if this client writes its own log.
    #[must_use]
    pub const fn logging_enabled(&self) -> bool {
        self.http_client.logger().is_enabled()
    }

    /// Sends a request to any API command.
    ///
    /// `method` is `"get"` or `"post"` in any case. GET parameters are sent
    /// in the query string; POST parameters are sent as a JSON body with the
    /// credentials merged in.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] for any other method, before
    /// anything is sent, and [`HttpError::Network`] if the transport fails.
    pub async fn request(
        &self,
        method: &str,
        command: &str,
        params: Params,
    ) -> Result<ApiResponse, HttpError> {
        let http_method: HttpMethod = method.parse()?;
        self.send(http_method, command, params).await
    }

    async fn send(
        &self,
        method: HttpMethod,
        command: &str,
        params: Params,
    ) -> Result<ApiResponse, HttpError> {
        self.http_client
            .request(HttpRequest::new(method, command, params))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;

    #[test]
    fn test_new_hashes_password() {
        let client = AlfacoinsClient::new("apicontest", "secret", "password", None).unwrap();

        assert_eq!(client.shop_name().as_ref(), "apicontest");
        assert_eq!(
            client.password_hash().as_ref(),
            "5F4DCC3B5AA765D61D8327DEB882CF99"
        );
        assert!(!client.logging_enabled());
    }

    #[test]
    fn test_new_with_logging() {
        let client = AlfacoinsClient::new(
            "apicontest",
            "secret",
            "password",
            Some(LoggingConfig::default()),
        )
        .unwrap();

        assert!(client.logging_enabled());
    }

    #[test]
    fn test_new_rejects_empty_credentials() {
        assert!(matches!(
            AlfacoinsClient::new("", "secret", "password", None),
            Err(ConfigError::EmptyShopName)
        ));
        assert!(matches!(
            AlfacoinsClient::new("apicontest", "", "password", None),
            Err(ConfigError::EmptySecretKey)
        ));
    }

    #[test]
    fn test_same_password_same_digest() {
        let first = AlfacoinsClient::new("a", "b", "aIXncDlApUS4nexB", None).unwrap();
        let second = AlfacoinsClient::new("c", "d", "aIXncDlApUS4nexB", None).unwrap();
        assert_eq!(first.password_hash(), second.password_hash());
    }

    #[tokio::test]
    async fn test_request_rejects_unknown_method_before_sending() {
        let config = AlfacoinsConfig::builder()
            .shop_name(ShopName::new("apicontest").unwrap())
            .secret_key(SecretKey::new("secret").unwrap())
            .password("password")
            // Nothing listens here; reaching the network would be a Network error
            .base_url(BaseUrl::new("http://127.0.0.1:1/api/").unwrap())
            .build()
            .unwrap();
        let client = AlfacoinsClient::from_config(&config).unwrap();

        let result = client.request("delete", "create", Params::new()).await;

        assert!(matches!(
            result,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::InvalidMethod { method }))
                if method == "delete"
        ));
    }
}
