//! # ALFAcoins API Rust Client
//!
//! A Rust client for the [ALFAcoins](https://www.alfacoins.com/developers)
//! cryptocurrency payment gateway: payment orders, BitSend payouts, and
//! balance, fee and rate queries.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`AlfacoinsClient`] with one async method per gateway endpoint
//! - Automatic authentication of POST requests (shop name, secret key and
//!   password digest merged into every body)
//! - [`ApiResponse`], which keeps unparseable bodies apart from JSON ones
//! - Optional per-client logging of requests and responses via [`LoggingConfig`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use alfacoins_api::{AlfacoinsClient, OrderRequest};
//!
//! let client = AlfacoinsClient::new(
//!     "apicontest",
//!     "07fc884cf02af307400a9df4f2d15490",
//!     "aIXncDlApUS4nexB",
//!     None,
//! )?;
//!
//! let order = client
//!     .create_order(&OrderRequest {
//!         coin_type: "bitcoin".to_string(),
//!         amount: 1.23412341,
//!         order_id: "Order10001".to_string(),
//!         currency: "USD".to_string(),
//!         description: "Payment for t-shirt ALFAcoins size XXL".to_string(),
//!         options: None,
//!     })
//!     .await?;
//!
//! if let Some(error) = order.error() {
//!     eprintln!("Gateway refused the order: {error}");
//! } else {
//!     println!("Pay to {:?}", order.get("address"));
//! }
//! ```
//!
//! ## Configuration and Logging
//!
//! ```rust
//! use alfacoins_api::{
//!     AlfacoinsClient, AlfacoinsConfig, LogLevel, LogTarget, LoggingConfig, SecretKey, ShopName,
//! };
//! use std::time::Duration;
//!
//! let config = AlfacoinsConfig::builder()
//!     .shop_name(ShopName::new("apicontest").unwrap())
//!     .secret_key(SecretKey::new("07fc884cf02af307400a9df4f2d15490").unwrap())
//!     .password("aIXncDlApUS4nexB")
//!     .timeout(Duration::from_secs(30))
//!     .logging(
//!         LoggingConfig::default()
//!             .with_level(LogLevel::Warning)
//!             .with_target(LogTarget::Console),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let client = AlfacoinsClient::from_config(&config).unwrap();
//! assert!(client.logging_enabled());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: each client owns its credentials and logger
//! - **Fail-fast validation**: credentials and requests are checked before sending
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Error statuses are responses**: the gateway's `error` field, not the
//!   HTTP status, signals failure

pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod logging;

// Re-export public types at crate root for convenience
pub use api::{AlfacoinsClient, IntoIdentifier, OrderOptions, OrderRequest, TestOrder};
pub use config::{
    AlfacoinsConfig, AlfacoinsConfigBuilder, BaseUrl, LogLevel, LogTarget, LogWriter,
    LoggingConfig, PasswordHash, SecretKey, ShopName,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiResponse, HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError, Params,
};
