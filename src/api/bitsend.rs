use serde::Serialize;
use serde_json::Value;

use super::params::IntoIdentifier;
use super::AlfacoinsClient;
use crate::clients::{to_params, ApiResponse, HttpError, HttpMethod, Params};

impl AlfacoinsClient {
    /// Sends a BitSend payout, e.g. salaries or direct deposits to
    /// cryptocurrency addresses.
    ///
    /// POST `bitsend`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `payout` is not an object and
    /// [`HttpError::Network`] if the transport fails.
    pub async fn bitsend<P>(&self, payout: &P) -> Result<ApiResponse, HttpError>
    where
        P: Serialize + ?Sized,
    {
        self.send(HttpMethod::Post, "bitsend", to_params(payout)?).await
    }

    /// Gets the status of a BitSend payout.
    ///
    /// POST `bitsend_status`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `bitsend_id` is not an
    /// integer and [`HttpError::Network`] if the transport fails.
    pub async fn bitsend_status(
        &self,
        bitsend_id: impl IntoIdentifier,
    ) -> Result<ApiResponse, HttpError> {
        let mut params = Params::new();
        params.insert(
            "bitsend_id".to_string(),
            Value::from(bitsend_id.into_identifier("bitsend_id")?),
        );
        self.send(HttpMethod::Post, "bitsend_status", params).await
    }
}
