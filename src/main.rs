//! Report Notifier - posts Cypress test-run results to Slack
//!
//! Reads the Mochawesome JSON summary written after an end-to-end run and
//! sends a one-message digest to an incoming webhook.

use clap::Parser;
use colored::Colorize;
use notifier::{cli, commands::Commands, exit_code};

#[derive(Parser)]
#[command(name = "report-notifier", about = "Post test-run summaries to a chat webhook")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    notifier::common::logging::init_cli();

    let cli = Cli::parse();

    let result = cli::dispatch(cli.command).await;

    if let Err(e) = &result {
        tracing::debug!(error = ?e, "Run failed");
        eprintln!("{} {e}", "❌".red());
    }

    std::process::exit(exit_code(&result));
}
