//! BotConfig: BaseConfig + TelegramConfig. Use load() for env-based loading.

use std::time::Duration;

use review_core::env::optional_var;
use review_core::{Chat, Result, ReviewError};
use review_telegram::TelegramConfig;

use super::BaseConfig;

/// Credentials that must be present before the loop starts.
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Bot config: BaseConfig + Telegram. Use BotConfig::load() for env-based loading.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub telegram: TelegramConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `retry_time_secs` is provided it overrides RETRY_TIME.
    /// All missing credentials are reported in one error. Call validate() after load.
    pub fn load(retry_time_secs: Option<u64>) -> Result<Self> {
        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|name| optional_var(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ReviewError::Config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let base = BaseConfig::load(retry_time_secs)?;
        let telegram = TelegramConfig::from_env()?;
        Ok(Self { base, telegram })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.telegram.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn telegram(&self) -> &TelegramConfig {
        &self.telegram
    }

    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn chat(&self) -> Chat {
        self.telegram.chat()
    }
    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.base.retry_time_secs)
    }
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.base.http_timeout_secs)
    }
}
