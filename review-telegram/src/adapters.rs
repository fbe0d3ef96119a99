//! Adapters from review_core types to Telegram (teloxide) types.

use review_core::Chat;
use teloxide::types::{ChatId, Recipient};

/// Wraps a core [`Chat`] for conversion to a teloxide [`Recipient`].
///
/// Numeric ids (including negative group ids) become [`Recipient::Id`]; anything else is sent as a
/// channel username, with a leading `@` added when missing.
pub struct ChatRecipient<'a>(pub &'a Chat);

impl<'a> ChatRecipient<'a> {
    pub fn to_recipient(&self) -> Recipient {
        let id = self.0.id.trim();
        match id.parse::<i64>() {
            Ok(numeric) => Recipient::Id(ChatId(numeric)),
            Err(_) if id.starts_with('@') => Recipient::ChannelUsername(id.to_string()),
            Err(_) => Recipient::ChannelUsername(format!("@{}", id)),
        }
    }
}
