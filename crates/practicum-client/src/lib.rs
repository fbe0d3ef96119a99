//! # Practicum homework statuses client
//!
//! Implements [`HomeworkApi`] against the Practicum homework statuses endpoint.
//!
//! ## Example
//!
//! ```rust,no_run
//! use practicum_client::PracticumClient;
//! use review_core::HomeworkApi;
//!
//! async fn example() -> review_core::Result<()> {
//!     let client = PracticumClient::new("your-oauth-token".to_string())?;
//!     let raw = client.fetch(0).await?;
//!     println!("{}", raw);
//!     Ok(())
//! }
//! ```
//!
//! ## Protocol
//!
//! `GET <endpoint>?from_date=<unix_ts>` with `Authorization: OAuth <token>`. Only `200 OK` counts
//! as success; the body must be JSON. Shape checks happen in the caller, this crate only
//! transports and decodes. Requests are bounded by a timeout and never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use review_core::{HomeworkApi, Result, ReviewError};
use tracing::{error, info};

/// Production endpoint of the homework statuses API.
pub const PRACTICUM_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const LOG_PREVIEW_LEN: usize = 200;

/// Practicum API client. Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Creates a client for the production endpoint with the default timeout.
    pub fn new(token: String) -> Result<Self> {
        Self::with_endpoint(
            token,
            PRACTICUM_ENDPOINT.to_string(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Creates a client for a custom endpoint (e.g. a mock server in tests).
    pub fn with_endpoint(token: String, endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ReviewError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Keeps the first 7 and last 4 characters of a token for logs.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

fn preview(text: &str) -> String {
    if text.chars().count() <= LOG_PREVIEW_LEN {
        text.to_string()
    } else {
        format!("{}...", text.chars().take(LOG_PREVIEW_LEN).collect::<String>())
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value> {
        info!(
            endpoint = %self.endpoint,
            from_date,
            token = %mask_token(&self.token),
            "step: requesting homework statuses"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, endpoint = %self.endpoint, "Homework API request failed");
                ReviewError::transport(e.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = status.as_u16(),
                body_preview = %preview(&body),
                "Homework API returned unexpected status"
            );
            return Err(ReviewError::unexpected_status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ReviewError::transport(format!("Failed to read response body: {}", e)))?;

        let value: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, body_preview = %preview(&body), "Homework API body is not JSON");
            ReviewError::Decode(e.to_string())
        })?;

        info!(body_len = body.len(), "step: homework statuses received");
        Ok(value)
    }
}
