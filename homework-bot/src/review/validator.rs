//! Structural check of the raw API body. Pure; rejects malformed shapes instead of coercing them.

use review_core::{HomeworkRecord, Result, ReviewError, ReviewResponse};
use serde_json::Value;

/// Validates a decoded API body and extracts homeworks (most recent first) and `current_date`.
///
/// Fails with [`ReviewError::Schema`] when the body is not an object, lacks `homeworks` or
/// `current_date`, `homeworks` is not a list, `current_date` is not an integer, or any
/// element of `homeworks` is not a well-typed object. Never returns a partial result.
pub fn validate(raw: &Value) -> Result<ReviewResponse> {
    let object = raw.as_object().ok_or_else(|| {
        ReviewError::Schema(format!("response is not an object but {}", json_kind(raw)))
    })?;

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| ReviewError::Schema("response has no `homeworks` key".to_string()))?;
    let current_date = object
        .get("current_date")
        .ok_or_else(|| ReviewError::Schema("response has no `current_date` key".to_string()))?;

    let list = homeworks.as_array().ok_or_else(|| {
        ReviewError::Schema(format!("`homeworks` is not a list but {}", json_kind(homeworks)))
    })?;
    let current_date = current_date.as_i64().ok_or_else(|| {
        ReviewError::Schema(format!(
            "`current_date` is not an integer timestamp: {}",
            current_date
        ))
    })?;

    let homeworks = list
        .iter()
        .enumerate()
        .map(|(index, item)| parse_record(index, item))
        .collect::<Result<Vec<_>>>()?;

    Ok(ReviewResponse {
        homeworks,
        current_date,
    })
}

fn parse_record(index: usize, item: &Value) -> Result<HomeworkRecord> {
    if !item.is_object() {
        return Err(ReviewError::Schema(format!(
            "homeworks[{}] is not an object but {}",
            index,
            json_kind(item)
        )));
    }
    serde_json::from_value(item.clone())
        .map_err(|e| ReviewError::Schema(format!("homeworks[{}]: {}", index, e)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
