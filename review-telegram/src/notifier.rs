//! Wraps teloxide::Bot and implements [`review_core::Notifier`]. Production code sends via Telegram; tests substitute another Notifier impl.

use async_trait::async_trait;
use review_core::{Chat, Notifier, Result, ReviewError};
use teloxide::requests::Requester;
use tracing::{error, info};

use crate::adapters::ChatRecipient;
use crate::config::TelegramConfig;

/// Thin wrapper around teloxide::Bot that implements review-core's Notifier trait.
pub struct TelegramNotifier {
    bot: teloxide::Bot,
}

impl TelegramNotifier {
    /// Creates a notifier from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Builds the teloxide Bot from config, pointing it at `telegram_api_url` when set.
    pub fn from_config(config: &TelegramConfig) -> Result<Self> {
        let bot = teloxide::Bot::new(config.bot_token.clone());
        let bot = match config.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str).map_err(|e| {
                    ReviewError::Config(format!("Invalid TELEGRAM_API_URL {}: {}", url_str, e))
                })?;
                bot.set_api_url(url)
            }
            None => bot,
        };
        Ok(Self::new(bot))
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, chat: &Chat, text: &str) -> Result<()> {
        info!(
            chat_id = %chat.id,
            text_len = text.chars().count(),
            "step: sending Telegram message"
        );
        self.bot
            .send_message(ChatRecipient(chat).to_recipient(), text.to_string())
            .await
            .map_err(|e| {
                error!(error = %e, chat_id = %chat.id, "Telegram send failed");
                ReviewError::Delivery(e.to_string())
            })?;
        info!(chat_id = %chat.id, "Telegram message sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    /// Teloxide request path format is `/bot<token>/<method>`.
    const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

    fn notifier_for(server: &mockito::ServerGuard) -> TelegramNotifier {
        let mut config = TelegramConfig::new(TEST_BOT_TOKEN.to_string(), "123".to_string());
        config.telegram_api_url = Some(server.url());
        TelegramNotifier::from_config(&config).unwrap()
    }

    fn send_message_path() -> String {
        format!("/bot{}/sendMessage", TEST_BOT_TOKEN)
    }

    #[tokio::test]
    async fn test_notify_posts_send_message() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", send_message_path().as_str())
            .match_body(Matcher::PartialJson(serde_json::json!({
                "chat_id": 123,
                "text": "Изменился статус проверки работы \"hw1\"."
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                "ok": true,
                "result": {
                    "message_id": 1,
                    "date": 1706529600,
                    "chat": {"id": 123, "type": "private"},
                    "from": {"id": 123456789, "is_bot": true, "first_name": "ReviewBot", "username": "reviewbot"},
                    "text": "ok"
                }
            }"#,
            )
            .create_async()
            .await;

        let notifier = notifier_for(&server);
        notifier
            .notify(&Chat::new("123"), "Изменился статус проверки работы \"hw1\".")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_notify_api_rejection_is_delivery_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", send_message_path().as_str())
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": false, "error_code": 400, "description": "Bad Request: chat not found"}"#)
            .create_async()
            .await;

        let notifier = notifier_for(&server);
        let err = notifier.notify(&Chat::new("123"), "hello").await.unwrap_err();

        assert!(matches!(err, ReviewError::Delivery(_)), "got {:?}", err);
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_from_config_rejects_invalid_api_url() {
        let mut config = TelegramConfig::new(TEST_BOT_TOKEN.to_string(), "123".to_string());
        config.telegram_api_url = Some("::not a url::".to_string());
        assert!(matches!(
            TelegramNotifier::from_config(&config),
            Err(ReviewError::Config(_))
        ));
    }
}
