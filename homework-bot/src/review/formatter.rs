//! Turns homework records into chat messages.

use review_core::{HomeworkRecord, HomeworkStatus, Result, ReviewError, StatusKey};

/// Sent once when the first successful poll finds no submissions at all.
pub const NO_SUBMISSIONS_MESSAGE: &str =
    "Пока нет работ на проверке: список пуст, ожидаем ревью.";

/// Prefix of failure reports forwarded to the chat.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// A message ready to send, with the key used for duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub key: StatusKey,
    pub text: String,
}

/// Formats `Изменился статус проверки работы "<name>". <verdict>`.
///
/// Fails with [`ReviewError::MissingField`] when `homework_name` or `status` is absent and
/// with [`ReviewError::UnknownStatus`] when the status is outside the verdict table.
pub fn format_status(record: &HomeworkRecord) -> Result<String> {
    status_update(record).map(|update| update.text)
}

/// Like [`format_status`], also returning the status key.
pub fn status_update(record: &HomeworkRecord) -> Result<StatusUpdate> {
    let name = record
        .homework_name
        .as_deref()
        .ok_or_else(|| ReviewError::MissingField("homework_name".to_string()))?;
    let status: HomeworkStatus = record
        .status
        .as_deref()
        .ok_or_else(|| ReviewError::MissingField("status".to_string()))?
        .parse()?;

    Ok(StatusUpdate {
        key: StatusKey::Homework {
            name: name.to_string(),
            status,
        },
        text: format!(
            "Изменился статус проверки работы \"{}\". {}",
            name,
            status.verdict()
        ),
    })
}

/// Update for an empty homework list.
pub fn no_submissions() -> StatusUpdate {
    StatusUpdate {
        key: StatusKey::NoSubmissions,
        text: NO_SUBMISSIONS_MESSAGE.to_string(),
    }
}

/// Chat text for a failed cycle.
pub fn failure_report(error: &ReviewError) -> String {
    format!("{}: {}", FAILURE_PREFIX, error)
}
