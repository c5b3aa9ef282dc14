use crate::errors::FetchError;
use crate::retry::RetryPolicy;
use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client that retries every GET according to a [`RetryPolicy`]
#[derive(Debug, Clone)]
pub struct RetryingClient {
    client: Client,
    retry: RetryPolicy,
}

impl RetryingClient {
    pub fn new(user_agent: &str, timeout: Duration, retry: RetryPolicy) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout)?;
        Ok(Self { client, retry })
    }

    /// GET `url` and decode the JSON body. The transfer is retried;
    /// decoding is not, a malformed body fails straight away.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let text = self.get_text(url).await?;
        serde_json::from_str(&text).map_err(|source| FetchError::Malformed {
            url: url.to_string(),
            source,
        })
    }

    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.retry.run(url, || self.send_get_request(url)).await
    }

    fn build_client(user_agent: &str, timeout: Duration) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))
    }
}
