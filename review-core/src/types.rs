//! Core types: chat, homework record, review status with its verdict table, status key.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ReviewError;

/// Destination chat. The id is opaque: a numeric Telegram chat id or a `@channel` username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: String,
}

impl Chat {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// One homework submission as returned by the review API. Only `homework_name` and `status`
/// are read; every other field (`id`, `reviewer_comment`, `lesson_name`, ...) is ignored, whatever
/// its type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    pub status: Option<String>,
}

/// A response that passed shape validation: homeworks most recent first, plus the server time
/// to use as the next cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewResponse {
    pub homeworks: Vec<HomeworkRecord>,
    pub current_date: i64,
}

/// Review status of a homework. The set is closed; anything else is an API contract change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    /// Status code as sent by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict shown to the student.
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HomeworkStatus {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HomeworkStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ReviewError::UnknownStatus(s.to_string()))
    }
}

/// What was last announced to the chat. Compared instead of rendered text so wording changes
/// never cause a repeated notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusKey {
    NoSubmissions,
    Homework {
        name: String,
        status: HomeworkStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_known_codes() {
        assert_eq!("approved".parse::<HomeworkStatus>().unwrap(), HomeworkStatus::Approved);
        assert_eq!("reviewing".parse::<HomeworkStatus>().unwrap(), HomeworkStatus::Reviewing);
        assert_eq!("rejected".parse::<HomeworkStatus>().unwrap(), HomeworkStatus::Rejected);
    }

    #[test]
    fn test_status_rejects_unknown_code() {
        let err = "pending".parse::<HomeworkStatus>().unwrap_err();
        assert!(matches!(err, ReviewError::UnknownStatus(ref s) if s == "pending"));
        assert!("Approved".parse::<HomeworkStatus>().is_err());
        assert!("".parse::<HomeworkStatus>().is_err());
    }

    #[test]
    fn test_verdict_table() {
        assert_eq!(
            HomeworkStatus::Approved.verdict(),
            "Работа проверена: ревьюеру всё понравилось. Ура!"
        );
        assert_eq!(
            HomeworkStatus::Reviewing.verdict(),
            "Работа взята на проверку ревьюером."
        );
        assert_eq!(
            HomeworkStatus::Rejected.verdict(),
            "Работа проверена: у ревьюера есть замечания."
        );
    }

    #[test]
    fn test_homework_record_ignores_informational_fields() {
        let record: HomeworkRecord = serde_json::from_value(serde_json::json!({
            "id": 124,
            "status": "rejected",
            "homework_name": "username__hw_python_oop.zip",
            "reviewer_comment": "Код не по PEP8",
            "date_updated": "2020-02-13T16:42:47Z",
            "lesson_name": "Итоговый проект",
            "extra": true
        }))
        .unwrap();

        assert_eq!(record.homework_name.as_deref(), Some("username__hw_python_oop.zip"));
        assert_eq!(record.status.as_deref(), Some("rejected"));
    }

    #[test]
    fn test_homework_record_tolerates_oddly_typed_extras() {
        let record: HomeworkRecord = serde_json::from_value(serde_json::json!({
            "id": "124",
            "homework_name": "hw1",
            "status": "approved",
            "reviewer_comment": null,
            "date_updated": 1581612167,
            "lesson_name": ["Итоговый проект"]
        }))
        .unwrap();

        assert_eq!(record.homework_name.as_deref(), Some("hw1"));
        assert_eq!(record.status.as_deref(), Some("approved"));
    }

    #[test]
    fn test_homework_record_missing_fields_are_none() {
        let record: HomeworkRecord =
            serde_json::from_value(serde_json::json!({"status": "approved"})).unwrap();
        assert!(record.homework_name.is_none());
        assert_eq!(record.status.as_deref(), Some("approved"));
    }
}
