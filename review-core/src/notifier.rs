//! Notifier and review API abstractions.
//!
//! [`Notifier`] is transport-agnostic (the Telegram implementation lives in review-telegram);
//! [`HomeworkApi`] is implemented by practicum-client. Tests substitute recording mocks for both.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Chat;

/// Sends text messages to a chat. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends one text message. Fails with [`crate::ReviewError::Delivery`] when the transport rejects it.
    async fn notify(&self, chat: &Chat, text: &str) -> Result<()>;
}

/// Source of homework statuses.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetches statuses changed since `from_date` (Unix seconds) and returns the raw JSON body.
    /// Shape checks are left to the caller.
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value>;
}
