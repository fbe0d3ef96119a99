//! Environment lookups shared by the config loaders.

use std::env;
use std::str::FromStr;

use crate::error::{Result, ReviewError};

/// Reads a required variable. Unset and blank values are both a [`ReviewError::Config`].
pub fn required_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ReviewError::Config(format!("{} not set", name))),
    }
}

/// Reads an optional variable; blank counts as unset.
pub fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Reads and parses an optional variable, falling back to `default` when unset.
/// A value that is set but does not parse is a [`ReviewError::Config`].
pub fn parsed_var<T: FromStr>(name: &str, default: T) -> Result<T> {
    match optional_var(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ReviewError::Config(format!("{} has invalid value: {}", name, raw))),
        None => Ok(default),
    }
}
