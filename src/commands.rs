//! CLI command definitions
//!
//! Defines the clap commands for the report notifier.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Post the test-run summary to the configured webhook
    Send {
        /// Path to the Mochawesome JSON report (overrides MOCHAWESOME_REPORT_PATH)
        #[arg(long, short)]
        report: Option<PathBuf>,

        /// Webhook URL (overrides SLACK_WEBHOOK_URL)
        #[arg(long)]
        webhook_url: Option<String>,

        /// Configuration file (default: platform config dir)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the payload instead of posting it
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the notification text without sending anything
    Preview {
        /// Path to the Mochawesome JSON report (overrides MOCHAWESOME_REPORT_PATH)
        #[arg(long, short)]
        report: Option<PathBuf>,

        /// Configuration file (default: platform config dir)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the full webhook payload as JSON
        #[arg(long)]
        json: bool,
    },
}
