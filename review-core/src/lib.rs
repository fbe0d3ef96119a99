//! # review-core
//!
//! Core types and traits for the homework review notifier: [`Notifier`], [`HomeworkApi`],
//! homework records and statuses, error kinds, and tracing initialization.
//! Transport-agnostic; used by practicum-client, review-telegram and homework-bot.

pub mod env;
pub mod error;
pub mod logger;
pub mod notifier;
pub mod types;

pub use error::{Result, ReviewError};
pub use logger::init_tracing;
pub use notifier::{HomeworkApi, Notifier};
pub use types::{Chat, HomeworkRecord, HomeworkStatus, ReviewResponse, StatusKey};
