//! Typed request parameters for ALFAcoins endpoints.
//!
//! Endpoints that take caller-supplied fields accept any
//! [`serde::Serialize`] value that serializes to a JSON object, so a
//! `serde_json::json!` literal works as well as the structs below.

use serde::Serialize;

use crate::clients::InvalidHttpRequestError;

/// Fields of a new payment order.
///
/// # Example
///
/// ```rust
/// use alfacoins_api::OrderRequest;
///
/// let order = OrderRequest {
///     coin_type: "bitcoin".to_string(),
///     amount: 1.23412341,
///     order_id: "Order10001".to_string(),
///     currency: "USD".to_string(),
///     description: "Payment for t-shirt ALFAcoins size XXL".to_string(),
///     options: None,
/// };
///
/// let json = serde_json::to_value(&order).unwrap();
/// assert_eq!(json["type"], "bitcoin");
/// assert!(json.get("options").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OrderRequest {
    /// Cryptocurrency the payer pays with (e.g. `bitcoin`, `litecointestnet`).
    #[serde(rename = "type")]
    pub coin_type: String,
    /// Amount in `currency`.
    pub amount: f64,
    /// Merchant-side order identifier.
    pub order_id: String,
    /// Fiat or crypto currency of `amount`.
    pub currency: String,
    /// Description shown to the payer.
    pub description: String,
    /// Optional notification and payer settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OrderOptions>,
}

/// Optional settings of a payment order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OrderOptions {
    /// URL the gateway notifies on status changes.
    #[serde(rename = "notificationURL", skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    /// URL the payer is sent to after paying.
    #[serde(rename = "redirectURL", skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    #[serde(rename = "payerName", skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,
    #[serde(rename = "payerEmail", skip_serializing_if = "Option::is_none")]
    pub payer_email: Option<String>,
    /// `1` marks a test order that triggers notifications without payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<u8>,
    /// Status to report for a test order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A fixed test order used to exercise notification handling.
///
/// # Example
///
/// ```rust
/// use alfacoins_api::TestOrder;
///
/// let order = TestOrder::new("https://shop.example.com/notify").status("paid");
/// let request = order.to_order_request();
/// assert_eq!(request.coin_type, "litecointestnet");
/// assert_eq!(request.options.unwrap().test, Some(1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestOrder {
    notification_url: String,
    status: String,
    coin_type: String,
}

impl TestOrder {
    /// Status reported when none is chosen.
    pub const DEFAULT_STATUS: &'static str = "completed";
    /// Coin type used when none is chosen.
    pub const DEFAULT_COIN_TYPE: &'static str = "litecointestnet";

    /// Creates a test order notifying `notification_url`.
    #[must_use]
    pub fn new(notification_url: impl Into<String>) -> Self {
        Self {
            notification_url: notification_url.into(),
            status: Self::DEFAULT_STATUS.to_string(),
            coin_type: Self::DEFAULT_COIN_TYPE.to_string(),
        }
    }

    /// Sets the status the gateway reports.
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the coin type.
    #[must_use]
    pub fn coin_type(mut self, coin_type: impl Into<String>) -> Self {
        self.coin_type = coin_type.into();
        self
    }

    /// Expands into the full order sent to the gateway.
    #[must_use]
    pub fn to_order_request(&self) -> OrderRequest {
        OrderRequest {
            coin_type: self.coin_type.clone(),
            amount: 1.234_123_41,
            order_id: "Order10001".to_string(),
            currency: "USD".to_string(),
            description: "Payment for t-shirt ALFAcoins size XXL".to_string(),
            options: Some(OrderOptions {
                notification_url: Some(self.notification_url.clone()),
                redirect_url: Some("https://www.alfacoinshop.com/my/orders/success".to_string()),
                payer_name: Some("Victor".to_string()),
                payer_email: Some("no_reply@alfacoins.com".to_string()),
                test: Some(1),
                status: Some(self.status.clone()),
            }),
        }
    }
}

/// Conversion of an order or payout identifier into the integer the gateway expects.
///
/// Implemented for the integer types and for strings holding a decimal
/// integer (surrounding whitespace is ignored).
pub trait IntoIdentifier {
    /// Converts `self`, naming `field` in the error on failure.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidIdentifier`] if the value is
    /// not an integer that fits in an `i64`.
    fn into_identifier(self, field: &'static str) -> Result<i64, InvalidHttpRequestError>;
}

macro_rules! impl_into_identifier_for_int {
    ($($ty:ty),*) => {
        $(
            impl IntoIdentifier for $ty {
                fn into_identifier(self, field: &'static str) -> Result<i64, InvalidHttpRequestError> {
                    i64::try_from(self).map_err(|_| InvalidHttpRequestError::InvalidIdentifier {
                        field,
                        value: self.to_string(),
                    })
                }
            }
        )*
    };
}

impl_into_identifier_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl IntoIdentifier for &str {
    fn into_identifier(self, field: &'static str) -> Result<i64, InvalidHttpRequestError> {
        self.trim()
            .parse()
            .map_err(|_| InvalidHttpRequestError::InvalidIdentifier {
                field,
                value: self.to_string(),
            })
    }
}

impl IntoIdentifier for String {
    fn into_identifier(self, field: &'static str) -> Result<i64, InvalidHttpRequestError> {
        self.as_str().into_identifier(field)
    }
}

impl IntoIdentifier for &String {
    fn into_identifier(self, field: &'static str) -> Result<i64, InvalidHttpRequestError> {
        self.as_str().into_identifier(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_request_serializes_gateway_field_names() {
        let order = OrderRequest {
            coin_type: "bitcoin".to_string(),
            amount: 1.5,
            order_id: "Order1".to_string(),
            currency: "USD".to_string(),
            description: "Test".to_string(),
            options: Some(OrderOptions {
                notification_url: Some("https://example.com/n".to_string()),
                payer_email: Some("payer@example.com".to_string()),
                ..OrderOptions::default()
            }),
        };

        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "type": "bitcoin",
                "amount": 1.5,
                "order_id": "Order1",
                "currency": "USD",
                "description": "Test",
                "options": {
                    "notificationURL": "https://example.com/n",
                    "payerEmail": "payer@example.com"
                }
            })
        );
    }

    #[test]
    fn test_test_order_defaults() {
        let request = TestOrder::new("https://shop.example.com/notify").to_order_request();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "type": "litecointestnet",
                "amount": 1.23412341,
                "order_id": "Order10001",
                "currency": "USD",
                "description": "Payment for t-shirt ALFAcoins size XXL",
                "options": {
                    "notificationURL": "https://shop.example.com/notify",
                    "redirectURL": "https://www.alfacoinshop.com/my/orders/success",
                    "payerName": "Victor",
                    "payerEmail": "no_reply@alfacoins.com",
                    "test": 1,
                    "status": "completed"
                }
            })
        );
    }

    #[test]
    fn test_test_order_overrides() {
        let request = TestOrder::new("https://n.example.com")
            .status("expired")
            .coin_type("bitcointestnet")
            .to_order_request();

        assert_eq!(request.coin_type, "bitcointestnet");
        assert_eq!(request.options.unwrap().status.as_deref(), Some("expired"));
    }

    #[test]
    fn test_identifiers_from_integers() {
        assert_eq!(12345_u32.into_identifier("txn_id"), Ok(12345));
        assert_eq!((-7_i32).into_identifier("txn_id"), Ok(-7));
        assert_eq!(42_i64.into_identifier("bitsend_id"), Ok(42));
    }

    #[test]
    fn test_identifiers_from_strings() {
        assert_eq!("12345".into_identifier("txn_id"), Ok(12345));
        assert_eq!(" 12345\n".into_identifier("txn_id"), Ok(12345));
        assert_eq!(String::from("99").into_identifier("bitsend_id"), Ok(99));
        assert_eq!((&String::from("7")).into_identifier("bitsend_id"), Ok(7));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert_eq!(
            "Order10001".into_identifier("txn_id"),
            Err(InvalidHttpRequestError::InvalidIdentifier {
                field: "txn_id",
                value: "Order10001".to_string(),
            })
        );
        assert!("12.5".into_identifier("txn_id").is_err());
        assert!("".into_identifier("txn_id").is_err());
        assert!(u64::MAX.into_identifier("bitsend_id").is_err());
    }
}
