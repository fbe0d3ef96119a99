//! Bot configuration: BaseConfig (review API + polling + log) + TelegramConfig (bot token, chat).

mod base;
mod bot_config;


pub use base::{BaseConfig, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LOG_FILE, DEFAULT_RETRY_TIME_SECS};
pub use bot_config::{BotConfig, REQUIRED_VARS};
