// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::Result;
use crate::models::ScraperConfig;

/// Status reported when the request never produced a response.
pub const STATUS_TRANSPORT_FAILURE: u16 = 0;

/// Status code and body of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }

    /// Response for a request that failed before any status was received.
    pub fn transport_failure() -> Self {
        Self {
            status: STATUS_TRANSPORT_FAILURE,
            body: String::new(),
        }
    }
}

/// Fetches a URL and reports status plus body. Never fails: transport errors
/// surface as a non-200 status with an empty body.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResponse;
}

/// `PageFetcher` backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResponse {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Request to {} failed: {}", url, e);
                return FetchResponse::transport_failure();
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => FetchResponse { status, body },
            Err(e) => {
                log::warn!("Reading body from {} failed: {}", url, e);
                FetchResponse {
                    status,
                    body: String::new(),
                }
            }
        }
    }
}

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &ScraperConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}
