//! Logging initialization: human-readable lines (timestamp, level, target, message, fields) to console and optional file.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    fmt::writer::{MakeWriter, MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Local time in `YYYY-MM-DD HH:MM:SS` for human-readable log lines.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let t = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(w, "{} ", t)
    }
}

/// Initializes the global tracing subscriber.
///
/// Output is `YYYY-MM-DD HH:MM:SS LEVEL target: message key=value ...`, no ANSI codes.
/// With `log_file_path` set, lines are teed to stdout and the file (parent directories are created).
/// Log level from `RUST_LOG` (e.g. `info`, `debug`); default `info`. Load `.env` before calling.
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file_path {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            install(env_filter, io::stdout.and(Arc::new(file)))
        }
        None => install(env_filter, io::stdout),
    }
}

fn install<W>(env_filter: EnvFilter, writer: W) -> anyhow::Result<()>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let event_format = tracing_subscriber::fmt::format()
        .with_timer(ChronoLocal)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .event_format(event_format)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Only test in this crate that installs the global subscriber.
    #[test]
    fn test_init_tracing_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/logs/bot.log");
        let path_str = path.to_str().unwrap().to_string();

        init_tracing(Some(path_str.as_str())).unwrap();
        tracing::info!(cursor = 1000, "heartbeat from logger test");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("heartbeat from logger test"));
        assert!(contents.contains("cursor=1000"));
        assert!(contents.contains("INFO"));

        assert!(init_tracing(None).is_err(), "second init must fail");
    }
}
