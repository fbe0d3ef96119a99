//! # review-telegram
//!
//! Telegram transport for review notifications: chat routing adapter, [`review_core::Notifier`]
//! implementation, minimal config. Sends only; no update polling, no persistence.

mod adapters;
mod config;
mod notifier;

pub use adapters::ChatRecipient;
pub use config::TelegramConfig;
pub use notifier::TelegramNotifier;
