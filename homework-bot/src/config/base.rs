//! Base config: review API access, poll interval, logging. Loaded from env.

use review_core::env::{optional_var, parsed_var, required_var};
use review_core::{Result, ReviewError};

pub const DEFAULT_RETRY_TIME_SECS: u64 = 600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = practicum_client::DEFAULT_TIMEOUT_SECS;
pub const DEFAULT_LOG_FILE: &str = "logs/homework-bot.log";

/// Base config: everything except the Telegram side.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// PRACTICUM_TOKEN
    pub practicum_token: String,
    /// PRACTICUM_ENDPOINT
    pub practicum_endpoint: String,
    /// HTTP_TIMEOUT_SECS; bounds each API request
    pub http_timeout_secs: u64,
    /// RETRY_TIME; seconds slept between poll cycles
    pub retry_time_secs: u64,
    /// LOG_FILE
    pub log_file: String,
}

impl BaseConfig {
    /// Load from environment variables. `retry_time_secs` overrides RETRY_TIME if provided.
    pub fn load(retry_time_secs: Option<u64>) -> Result<Self> {
        let practicum_token = required_var("PRACTICUM_TOKEN")?;
        let practicum_endpoint = optional_var("PRACTICUM_ENDPOINT")
            .unwrap_or_else(|| practicum_client::PRACTICUM_ENDPOINT.to_string());
        let http_timeout_secs = parsed_var("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?;
        let retry_time_secs = match retry_time_secs {
            Some(secs) => secs,
            None => parsed_var("RETRY_TIME", DEFAULT_RETRY_TIME_SECS)?,
        };
        let log_file = optional_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            practicum_token,
            practicum_endpoint,
            http_timeout_secs,
            retry_time_secs,
            log_file,
        })
    }

    /// Validate config: endpoint must be a URL, interval and timeout non-zero.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.practicum_endpoint).is_err() {
            return Err(ReviewError::Config(format!(
                "PRACTICUM_ENDPOINT is not a valid URL: {}",
                self.practicum_endpoint
            )));
        }
        if self.retry_time_secs == 0 {
            return Err(ReviewError::Config("RETRY_TIME must be at least 1 second".to_string()));
        }
        if self.http_timeout_secs == 0 {
            return Err(ReviewError::Config(
                "HTTP_TIMEOUT_SECS must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}
