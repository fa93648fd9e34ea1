//! Report Notifier - Cypress test-run summaries for chat webhooks
//!
//! This library loads a Mochawesome JSON report, renders a status digest
//! and delivers it to a Slack-compatible incoming webhook.

pub mod cli;
pub mod commands;
pub mod common;
pub mod message;
pub mod notifier;
pub mod report;
pub mod webhook;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use message::{build_message, NotificationMessage, Status};
pub use notifier::{exit_code, Endpoint, Notifier, Outcome};
pub use report::{load_summary, TestRunSummary};
