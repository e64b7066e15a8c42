//! Configuration of the validator client.

use crate::{ClientError, ClientResult, HttpValidatorProvider, ValidatorClient};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default timeout for validator requests in milliseconds.
pub const DEFAULT_RPC_TIMEOUT: u64 = 5000;

/// Builder for a [`ValidatorClient`] over HTTP.
#[derive(Debug, Clone)]
pub struct ValidatorClientConfig {
    /// The validator RPC URL.
    pub url: Url,
    /// The timeout duration for requests.
    pub timeout: Duration,
}

impl ValidatorClientConfig {
    /// Creates a new [`ValidatorClientConfig`] for the given URL.
    pub const fn new(url: Url) -> Self {
        Self { url, timeout: Duration::from_millis(DEFAULT_RPC_TIMEOUT) }
    }

    /// Sets the timeout duration for requests.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the [`ValidatorClient`].
    pub fn build(self) -> ClientResult<ValidatorClient<HttpValidatorProvider>> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ClientError::HttpClientBuild(e.to_string()))?;
        debug!(
            target: "validator_client",
            url = %self.url,
            timeout = ?self.timeout,
            "Built validator client"
        );
        Ok(ValidatorClient::new(HttpValidatorProvider::new(client, self.url)))
    }
}
