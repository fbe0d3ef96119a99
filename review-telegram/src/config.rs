//! Minimal Telegram config: bot token, target chat, optional API URL.
//! Loaded from env: TELEGRAM_TOKEN, TELEGRAM_CHAT_ID, TELEGRAM_API_URL (or TELOXIDE_API_URL).

use review_core::env::{optional_var, required_var};
use review_core::{Chat, Result, ReviewError};

/// Telegram connectivity config for the notifier.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env: TELEGRAM_TOKEN and TELEGRAM_CHAT_ID required; TELEGRAM_API_URL optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = required_var("TELEGRAM_TOKEN")?;
        let chat_id = required_var("TELEGRAM_CHAT_ID")?;
        let telegram_api_url =
            optional_var("TELEGRAM_API_URL").or_else(|| optional_var("TELOXIDE_API_URL"));
        Ok(Self {
            bot_token,
            chat_id,
            telegram_api_url,
        })
    }

    /// Builds config with the given token and chat; API URL None.
    pub fn new(bot_token: String, chat_id: String) -> Self {
        Self {
            bot_token,
            chat_id,
            telegram_api_url: None,
        }
    }

    /// Checks that telegram_api_url, if set, is a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(ReviewError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )));
            }
        }
        Ok(())
    }

    pub fn chat(&self) -> Chat {
        Chat::new(self.chat_id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for name in [
            "TELEGRAM_TOKEN",
            "TELEGRAM_CHAT_ID",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_new() {
        let config = TelegramConfig::new("test_token".to_string(), "42".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert_eq!(config.chat(), Chat::new("42"));
        assert!(config.telegram_api_url.is_none());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "123:abc");
        env::set_var("TELEGRAM_CHAT_ID", "42");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");

        let config = TelegramConfig::from_env().unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.chat_id, "42");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_chat_id() {
        clear_env();
        env::set_var("TELEGRAM_TOKEN", "123:abc");

        let err = TelegramConfig::from_env().unwrap_err();

        assert!(err.is_fatal());
        assert!(err.to_string().contains("TELEGRAM_CHAT_ID"));
        clear_env();
    }

    #[test]
    fn test_validate_invalid_api_url() {
        let mut config = TelegramConfig::new("t".to_string(), "1".to_string());
        config.telegram_api_url = Some("not-a-valid-url".to_string());
        assert!(config.validate().is_err());
    }
}
