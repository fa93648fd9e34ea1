//! CLI command handling
//!
//! Resolves configuration, runs the notifier and prints the operator-facing
//! result line for each terminal state.

use colored::Colorize;

use crate::commands::Commands;
use crate::common::config::{Config, NotifierConfig, ENV_WEBHOOK_URL};
use crate::common::Result;
use crate::notifier::{Notifier, Outcome};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<Outcome> {
    match command {
        Commands::Send {
            report,
            webhook_url,
            config,
            dry_run,
        } => {
            let file = Config::load(config.as_deref())?;
            let config = NotifierConfig::from_env(file)
                .with_report_path(report)
                .with_webhook_url(webhook_url);

            tracing::debug!(report = %config.report_path.display(), "Resolved configuration");

            let outcome = Notifier::new(config).dry_run(dry_run).run().await?;

            match &outcome {
                Outcome::Skipped => {
                    println!(
                        "{}",
                        format!(
                            "⚠️  {} not found. Skipping Slack notification.",
                            ENV_WEBHOOK_URL
                        )
                        .yellow()
                    );
                }
                Outcome::Delivered => {
                    println!("{}", "✅ Message sent to Slack successfully.".green());
                }
                Outcome::DryRun(message) => {
                    println!("{}", serde_json::to_string_pretty(message)?);
                }
                Outcome::Previewed(_) => {}
            }

            Ok(outcome)
        }

        Commands::Preview {
            report,
            config,
            json,
        } => {
            let file = Config::load(config.as_deref())?;
            let config = NotifierConfig::from_env(file).with_report_path(report);

            let outcome = Notifier::new(config).preview()?;

            if let Outcome::Previewed(message) = &outcome {
                if json {
                    println!("{}", serde_json::to_string_pretty(message)?);
                } else {
                    println!("{}", message.text);
                }
            }

            Ok(outcome)
        }
    }
}
