use serde::Serialize;
use serde_json::Value;

use super::params::{IntoIdentifier, TestOrder};
use super::AlfacoinsClient;
use crate::clients::{to_params, ApiResponse, HttpError, HttpMethod, Params};

impl AlfacoinsClient {
    /// Creates an order for payment.
    ///
    /// POST `create`. `order` is typically an
    /// [`OrderRequest`](super::OrderRequest), but any value serializing to a
    /// JSON object is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `order` is not an object and
    /// [`HttpError::Network`] if the transport fails.
    pub async fn create_order<P>(&self, order: &P) -> Result<ApiResponse, HttpError>
    where
        P: Serialize + ?Sized,
    {
        self.send(HttpMethod::Post, "create", to_params(order)?).await
    }

    /// Creates a test order, which makes the gateway send notifications to
    /// the order's notification URL without any payment.
    ///
    /// POST `create`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport fails.
    pub async fn create_test_order(&self, order: &TestOrder) -> Result<ApiResponse, HttpError> {
        self.create_order(&order.to_order_request()).await
    }

    /// Gets the status of a created order.
    ///
    /// POST `status` with `txn_id`, the gateway-assigned order id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `order_id` is not an integer
    /// and [`HttpError::Network`] if the transport fails.
    pub async fn order_status(&self, order_id: impl IntoIdentifier) -> Result<ApiResponse, HttpError> {
        let mut params = Params::new();
        params.insert(
            "txn_id".to_string(),
            Value::from(order_id.into_identifier("txn_id")?),
        );
        self.send(HttpMethod::Post, "status", params).await
    }

    /// Refunds a completed order.
    ///
    /// POST `refund`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `refund` is not an object and
    /// [`HttpError::Network`] if the transport fails.
    pub async fn refund_order<P>(&self, refund: &P) -> Result<ApiResponse, HttpError>
    where
        P: Serialize + ?Sized,
    {
        self.send(HttpMethod::Post, "refund", to_params(refund)?).await
    }
}
