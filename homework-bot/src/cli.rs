//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "homework-bot")]
#[command(about = "Homework review status notifier for Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Poll the review API forever and notify on status changes (config from env).
    Run {
        /// Seconds between cycles; overrides RETRY_TIME.
        #[arg(short, long)]
        interval: Option<u64>,
        /// Initial `from_date` cursor (Unix seconds); defaults to now.
        #[arg(long)]
        from_date: Option<i64>,
    },
    /// Run a single cycle, print its outcome and exit; non-zero exit if it failed.
    Check {
        /// `from_date` cursor (Unix seconds); defaults to now.
        #[arg(long)]
        from_date: Option<i64>,
    },
}

/// Load BotConfig from environment. If `interval` is provided it overrides RETRY_TIME.
pub fn load_config(interval: Option<u64>) -> Result<BotConfig> {
    Ok(BotConfig::load(interval)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::try_parse_from(["homework-bot", "run"]).unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                interval: None,
                from_date: None
            }
        );
    }

    #[test]
    fn test_parse_run_with_options() {
        let cli =
            Cli::try_parse_from(["homework-bot", "run", "-i", "60", "--from-date", "1549962000"])
                .unwrap();
        assert_eq!(
            cli.command,
            Commands::Run {
                interval: Some(60),
                from_date: Some(1549962000)
            }
        );
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["homework-bot", "check", "--from-date", "0"]).unwrap();
        assert_eq!(cli.command, Commands::Check { from_date: Some(0) });
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["homework-bot"]).is_err());
    }
}
