use super::AlfacoinsClient;
use crate::clients::{ApiResponse, HttpError, HttpMethod, Params};

impl AlfacoinsClient {
    /// Merchant's volume and balance statistics.
    ///
    /// POST `stats`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport fails.
    pub async fn get_stats(&self) -> Result<ApiResponse, HttpError> {
        self.send(HttpMethod::Post, "stats", Params::new()).await
    }

    /// All gate fees for deposit and withdrawal.
    ///
    /// GET `fees`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport fails.
    pub async fn get_fees(&self) -> Result<ApiResponse, HttpError> {
        self.send(HttpMethod::Get, "fees", Params::new()).await
    }
}
