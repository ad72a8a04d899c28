use serde_json::Value;

use super::AlfacoinsClient;
use crate::clients::{ApiResponse, HttpError, HttpMethod, InvalidHttpRequestError, Params};

impl AlfacoinsClient {
    /// Rate for a pair of symbols.
    ///
    /// GET `rate/{from}_{to}.json`; each symbol is percent-encoded into the path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport fails.
    pub async fn rate(&self, from: &str, to: &str) -> Result<ApiResponse, HttpError> {
        let command = format!(
            "rate/{}_{}.json",
            urlencoding::encode(from),
            urlencoding::encode(to)
        );
        self.send(HttpMethod::Get, &command, Params::new()).await
    }

    /// Rates for all available pairs.
    ///
    /// GET `rates`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport fails.
    pub async fn get_rates(&self) -> Result<ApiResponse, HttpError> {
        self.send(HttpMethod::Get, "rates", Params::new()).await
    }

    /// Converts `amount` of `from` into `to`.
    ///
    /// GET `convert` with `pair` and `amount` in the query string.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] if `amount` is NaN or infinite,
    /// before anything is sent, and [`HttpError::Network`] if the transport
    /// fails.
    pub async fn convert(&self, from: &str, to: &str, amount: f64) -> Result<ApiResponse, HttpError> {
        if !amount.is_finite() {
            return Err(InvalidHttpRequestError::InvalidParams {
                reason: format!("amount must be a finite number, got {amount}"),
            }
            .into());
        }

        let mut params = Params::new();
        params.insert("pair".to_string(), Value::from(format!("{from}_{to}")));
        params.insert("amount".to_string(), Value::from(amount));
        self.send(HttpMethod::Get, "convert", params).await
    }
}
