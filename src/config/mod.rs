//! Configuration types for the ALFAcoins API client.
//!
//! This module provides the credentials and settings a client is built from.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AlfacoinsConfig`]: The configuration struct holding credentials and settings
//! - [`AlfacoinsConfigBuilder`]: A builder for constructing [`AlfacoinsConfig`] instances
//! - [`ShopName`]: A validated shop name newtype
//! - [`SecretKey`]: A validated secret key newtype with masked debug output
//! - [`PasswordHash`]: The digest of the raw API password
//! - [`BaseUrl`]: A validated API base URL
//! - [`LoggingConfig`]: Options for the client's request/response log
//!
//! # Example
//!
//! ```rust
//! use alfacoins_api::{AlfacoinsConfig, LoggingConfig, SecretKey, ShopName};
//!
//! let config = AlfacoinsConfig::builder()
//!     .shop_name(ShopName::new("apicontest").unwrap())
//!     .secret_key(SecretKey::new("07fc884cf02af307400a9df4f2d15490").unwrap())
//!     .password("aIXncDlApUS4nexB")
//!     .logging(LoggingConfig::default())
//!     .build()
//!     .unwrap();
//! ```

mod logging;
mod newtypes;

pub use logging::{
    LogLevel, LogTarget, LogWriter, LogWriterGuard, LoggingConfig, DEFAULT_LOG_FILENAME,
    DEFAULT_LOG_FORMAT,
};
pub use newtypes::{BaseUrl, PasswordHash, SecretKey, ShopName};

use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for an ALFAcoins client.
///
/// Holds the three credentials sent with every authenticated request and
/// the transport and logging settings. The raw password is hashed when it
/// is handed to the builder and is never stored.
///
/// # Thread Safety
///
/// `AlfacoinsConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct AlfacoinsConfig {
    shop_name: ShopName,
    secret_key: SecretKey,
    password_hash: PasswordHash,
    base_url: BaseUrl,
    timeout: Option<Duration>,
    logging: Option<LoggingConfig>,
}

impl AlfacoinsConfig {
    /// Creates a new builder for constructing an `AlfacoinsConfig`.
    #[must_use]
    pub fn builder() -> AlfacoinsConfigBuilder {
        AlfacoinsConfigBuilder::new()
    }

    /// Returns the shop name.
    #[must_use]
    pub const fn shop_name(&self) -> &ShopName {
        &self.shop_name
    }

    /// Returns the secret key.
    #[must_use]
    pub const fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the password digest.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the logging configuration, if logging is enabled.
    #[must_use]
    pub const fn logging(&self) -> Option<&LoggingConfig> {
        self.logging.as_ref()
    }
}

// Verify AlfacoinsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AlfacoinsConfig>();
};

/// Builder for constructing [`AlfacoinsConfig`] instances.
///
/// Required fields are `shop_name`, `secret_key` and `password`.
///
/// # Defaults
///
/// - `base_url`: `https://www.alfacoins.com/api/`
/// - `timeout`: `None` (the transport's default)
/// - `logging`: `None` (disabled)
#[derive(Debug, Default)]
pub struct AlfacoinsConfigBuilder {
    shop_name: Option<ShopName>,
    secret_key: Option<SecretKey>,
    password_hash: Option<PasswordHash>,
    base_url: Option<BaseUrl>,
    timeout: Option<Duration>,
    logging: Option<LoggingConfig>,
}

impl AlfacoinsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop name (required).
    #[must_use]
    pub fn shop_name(mut self, name: ShopName) -> Self {
        self.shop_name = Some(name);
        self
    }

    /// Sets the secret key (required).
    #[must_use]
    pub fn secret_key(mut self, key: SecretKey) -> Self {
        self.secret_key = Some(key);
        self
    }

    /// Sets the raw API password (required). It is hashed immediately.
    #[must_use]
    pub fn password(mut self, password: &str) -> Self {
        self.password_hash = Some(PasswordHash::from_raw(password));
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets a timeout applied to each whole request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables logging with the given options.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Enables logging with the default options: DEBUG level to the console.
    #[must_use]
    pub fn default_logging(self) -> Self {
        self.logging(LoggingConfig::default())
    }

    /// Builds the [`AlfacoinsConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop_name`,
    /// `secret_key` or `password` are not set.
    pub fn build(self) -> Result<AlfacoinsConfig, ConfigError> {
        let shop_name = self
            .shop_name
            .ok_or(ConfigError::MissingRequiredField { field: "shop_name" })?;
        let secret_key = self
            .secret_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "secret_key",
            })?;
        let password_hash = self
            .password_hash
            .ok_or(ConfigError::MissingRequiredField { field: "password" })?;

        Ok(AlfacoinsConfig {
            shop_name,
            secret_key,
            password_hash,
            base_url: self.base_url.unwrap_or_default(),
            timeout: self.timeout,
            logging: self.logging,
        })
    }
}
