//! Validated newtype wrappers for credential and endpoint values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use md5::{Digest, Md5};
use std::fmt;

/// A validated ALFAcoins shop name.
///
/// The shop name is assigned when the API is created in the merchant
/// dashboard and is sent verbatim as the `name` field of every
/// authenticated request.
///
/// # Example
///
/// ```rust
/// use alfacoins_api::ShopName;
///
/// let name = ShopName::new("apicontest").unwrap();
/// assert_eq!(name.as_ref(), "apicontest");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopName(String);

impl ShopName {
    /// Creates a new validated shop name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyShopName`] if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ConfigError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ConfigError::EmptyShopName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for ShopName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated ALFAcoins secret key.
///
/// This newtype ensures the secret key is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Example
///
/// ```rust
/// use alfacoins_api::SecretKey;
///
/// let secret = SecretKey::new("07fc884cf02af307400a9df4f2d15490").unwrap();
/// assert_eq!(format!("{:?}", secret), "SecretKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Creates a new validated secret key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptySecretKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptySecretKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for SecretKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(*****)")
    }
}

/// The digest of the raw API password, as the gateway expects it.
///
/// The raw password is hashed once with MD5 and rendered as 32 uppercase
/// hexadecimal characters. The raw value is never retained.
///
/// # Example
///
/// ```rust
/// use alfacoins_api::PasswordHash;
///
/// let hash = PasswordHash::from_raw("password");
/// assert_eq!(hash.as_ref(), "5F4DCC3B5AA765D61D8327DEB882CF99");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hashes the UTF-8 bytes of a raw password.
    #[must_use]
    pub fn from_raw(password: &str) -> Self {
        let digest = Md5::digest(password.as_bytes());
        Self(format!("{digest:X}"))
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(*****)")
    }
}

/// A validated API base URL.
///
/// Commands are appended to this URL verbatim, so it is normalized to end
/// with a `/`.
///
/// # Example
///
/// ```rust
/// use alfacoins_api::BaseUrl;
///
/// let url = BaseUrl::new("http://127.0.0.1:8080/api").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080/api/");
/// assert_eq!(url.join("fees"), "http://127.0.0.1:8080/api/fees");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// The production ALFAcoins API endpoint.
    pub const PRODUCTION: &'static str = "https://www.alfacoins.com/api/";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL is not `http` or
    /// `https`, or has no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let remainder = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let host_end = remainder.find([':', '/', '?', '#']).unwrap_or(remainder.len());
        if host_end == 0 || remainder.contains(['?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        if url.ends_with('/') {
            Ok(Self(url))
        } else {
            Ok(Self(format!("{url}/")))
        }
    }

    /// Appends a command path to the base URL.
    #[must_use]
    pub fn join(&self, command: &str) -> String {
        format!("{}{}", self.0, command)
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Self::PRODUCTION.to_string())
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
