//! Poll loop: fetch → validate → format → (notify) → sleep, with duplicate suppression and
//! uniform catch-log-report-continue handling of per-cycle failures.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use practicum_client::PracticumClient;
use review_core::{init_tracing, Chat, HomeworkApi, Notifier, ReviewError, StatusKey};
use review_telegram::TelegramNotifier;
use tracing::{error, info, instrument, warn};

use crate::config::BotConfig;
use crate::review::{failure_report, no_submissions, status_update, validate, StatusUpdate};

/// Loop state owned by the caller and threaded through every cycle. Lost on restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// `from_date` for the next request.
    pub cursor: i64,
    /// Last status announced to the chat.
    pub last_sent: Option<StatusKey>,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_sent: None,
        }
    }

    /// State whose cursor is the current Unix time.
    pub fn starting_now() -> Self {
        Self::new(chrono::Utc::now().timestamp())
    }

    /// Moves the cursor to the server time. The cursor never goes backwards.
    fn advance_cursor(&mut self, current_date: i64) {
        if current_date < self.cursor {
            warn!(
                cursor = self.cursor,
                current_date, "Server time is behind the cursor, keeping cursor"
            );
            return;
        }
        self.cursor = current_date;
    }
}

/// Result of one cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// A new status was sent; carries the message text.
    Notified(String),
    /// Nothing new to announce.
    Unchanged,
    /// The cycle failed; the failure was logged and reported.
    Failed(ReviewError),
}

impl CycleOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, CycleOutcome::Failed(_))
    }
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleOutcome::Notified(text) => write!(f, "notified: {}", text),
            CycleOutcome::Unchanged => f.write_str("unchanged"),
            CycleOutcome::Failed(e) => write!(f, "failed: {}", e),
        }
    }
}

/// Review API, notifier and target chat wired together. Stateless; see [`PollState`].
pub struct Poller {
    api: Arc<dyn HomeworkApi>,
    notifier: Arc<dyn Notifier>,
    chat: Chat,
    interval: Duration,
}

impl Poller {
    pub fn new(
        api: Arc<dyn HomeworkApi>,
        notifier: Arc<dyn Notifier>,
        chat: Chat,
        interval: Duration,
    ) -> Self {
        Self {
            api,
            notifier,
            chat,
            interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs one cycle. Never fails: errors are logged, reported to the chat and returned as
    /// [`CycleOutcome::Failed`]; the cursor only advances on success.
    #[instrument(skip(self, state), fields(cursor = state.cursor))]
    pub async fn run_cycle(&self, state: &mut PollState) -> CycleOutcome {
        match self.poll(state).await {
            Ok(outcome) => {
                info!(cursor = state.cursor, outcome = %outcome, "Cycle completed");
                outcome
            }
            Err(e) => {
                self.report_failure(state, &e).await;
                CycleOutcome::Failed(e)
            }
        }
    }

    /// Runs cycles forever, sleeping `interval` after each one.
    pub async fn run(&self, mut state: PollState) {
        loop {
            let outcome = self.run_cycle(&mut state).await;
            if !outcome.is_failed() {
                info!(
                    next_in_secs = self.interval.as_secs(),
                    "No failures, sleeping until next cycle"
                );
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    async fn poll(&self, state: &mut PollState) -> review_core::Result<CycleOutcome> {
        let raw = self.api.fetch(state.cursor).await?;
        let response = validate(&raw)?;

        let update = match response.homeworks.first() {
            Some(latest) => Some(status_update(latest)?),
            // An empty window after a sent status only means nothing changed since the cursor.
            None if state.last_sent.is_none() => Some(no_submissions()),
            None => None,
        };

        let outcome = match update {
            Some(StatusUpdate { key, text }) if state.last_sent.as_ref() != Some(&key) => {
                self.notifier.notify(&self.chat, &text).await?;
                state.last_sent = Some(key);
                CycleOutcome::Notified(text)
            }
            _ => CycleOutcome::Unchanged,
        };

        state.advance_cursor(response.current_date);
        Ok(outcome)
    }

    /// Logs the failure and forwards it to the chat, best effort. Every failed cycle is reported.
    async fn report_failure(&self, state: &PollState, failure: &ReviewError) {
        error!(error = %failure, cursor = state.cursor, "Cycle failed");

        let report = failure_report(failure);
        if let Err(e) = self.notifier.notify(&self.chat, &report).await {
            error!(error = %e, "Failed to deliver failure report");
        }
    }
}

/// Builds the production poller: Practicum client + Telegram notifier.
pub fn build_poller(config: &BotConfig) -> Result<Poller> {
    let api = PracticumClient::with_endpoint(
        config.base().practicum_token.clone(),
        config.base().practicum_endpoint.clone(),
        config.http_timeout(),
    )?;
    let notifier = TelegramNotifier::from_config(config.telegram())?;

    Ok(Poller::new(
        Arc::new(api),
        Arc::new(notifier),
        config.chat(),
        config.retry_interval(),
    ))
}

fn init(config: &BotConfig) -> Result<Poller> {
    config.validate()?;
    init_tracing(Some(config.log_file()))?;
    build_poller(config)
}

/// Main entry: validate config, init logging, build clients, then poll until the process is killed.
/// `from_date` overrides the initial cursor (default: now).
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig, from_date: Option<i64>) -> Result<()> {
    let poller = init(&config)?;
    let state = from_date.map(PollState::new).unwrap_or_else(PollState::starting_now);

    info!(
        endpoint = %config.base().practicum_endpoint,
        chat_id = %config.telegram().chat_id,
        interval_secs = poller.interval().as_secs(),
        cursor = state.cursor,
        "Bot started"
    );

    poller.run(state).await;
    Ok(())
}

/// Runs a single cycle (with notifications) and returns its outcome.
#[instrument(skip(config))]
pub async fn run_check(config: BotConfig, from_date: Option<i64>) -> Result<CycleOutcome> {
    let poller = init(&config)?;
    let mut state = from_date.map(PollState::new).unwrap_or_else(PollState::starting_now);

    info!(cursor = state.cursor, "Running single check cycle");
    Ok(poller.run_cycle(&mut state).await)
}
