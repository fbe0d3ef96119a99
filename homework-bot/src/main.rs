//! Binary for the homework review notifier.

use anyhow::Result;
use clap::Parser;
use homework_bot::{load_config, run_bot, run_check, Cli, Commands, CycleOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            interval,
            from_date,
        } => {
            let config = load_config(interval)?;
            run_bot(config, from_date).await
        }
        Commands::Check { from_date } => {
            let config = load_config(None)?;
            match run_check(config, from_date).await? {
                CycleOutcome::Failed(e) => Err(e.into()),
                outcome => {
                    println!("{}", outcome);
                    Ok(())
                }
            }
        }
    }
}
