//! # Homework review notifier
//!
//! Polls the Practicum homework statuses API, detects status changes of the most recent
//! submission and forwards them to a Telegram chat. Wires practicum-client, review-telegram and
//! review-core; loads config from env and runs the poll loop.

pub mod cli;
pub mod config;
pub mod review;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
pub use review::{failure_report, format_status, validate, NO_SUBMISSIONS_MESSAGE};
pub use runner::{build_poller, run_bot, run_check, CycleOutcome, PollState, Poller};

// Re-export core so binaries and tests need a single dependency.
pub use review_core::{
    Chat, HomeworkApi, HomeworkRecord, HomeworkStatus, Notifier, Result, ReviewError,
    ReviewResponse, StatusKey,
};
