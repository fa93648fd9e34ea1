//! Report notifier state machine
//!
//! `LoadSummary -> ResolveEndpoint -> (Skip | BuildMessage -> Deliver)`.
//! Every path ends in an [`Outcome`] or an [`Error`]; the process exit code
//! is derived from that result by [`exit_code`].

use crate::common::config::NotifierConfig;
use crate::common::{Error, Result};
use crate::message::{build_message, NotificationMessage};
use crate::report::{self, TestRunSummary};
use crate::webhook::{SlackWebhook, Webhook};

/// Where the notification should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Url(String),
    /// No webhook configured
    Skipped,
}

/// Terminal state of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No webhook URL configured; nothing was sent
    Skipped,
    /// The webhook accepted the message
    Delivered,
    /// Message was built but not sent
    DryRun(NotificationMessage),
    /// Message text rendered for local inspection
    Previewed(NotificationMessage),
}

/// Process exit status for a run result
pub fn exit_code(result: &Result<Outcome>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    }
}

/// Drives a single notification run
pub struct Notifier {
    config: NotifierConfig,
    dry_run: bool,
}

impl Notifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            config,
            dry_run: false,
        }
    }

    /// Build the payload without posting it
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn load_summary(&self) -> Result<TestRunSummary> {
        report::load_summary(&self.config.report_path)
    }

    pub fn resolve_target_endpoint(&self) -> Endpoint {
        match &self.config.webhook_url {
            Some(url) => Endpoint::Url(url.clone()),
            None => Endpoint::Skipped,
        }
    }

    pub fn build_message(&self, summary: &TestRunSummary) -> NotificationMessage {
        build_message(summary, &self.config.context, &self.config.message)
    }

    /// Load the summary and render the message, without resolving an
    /// endpoint
    pub fn preview(&self) -> Result<Outcome> {
        let summary = self.load_summary()?;
        Ok(Outcome::Previewed(self.build_message(&summary)))
    }

    /// Run against a Slack incoming webhook
    pub async fn run(&self) -> Result<Outcome> {
        self.run_with(|url| SlackWebhook::new(url)).await
    }

    /// Run the state machine, creating the webhook client with `connect`
    /// once an endpoint is known
    pub async fn run_with<W, F>(&self, connect: F) -> Result<Outcome>
    where
        W: Webhook,
        F: FnOnce(String) -> W,
    {
        let summary = self.load_summary()?;

        let url = match self.resolve_target_endpoint() {
            Endpoint::Url(url) => url,
            Endpoint::Skipped => {
                tracing::debug!("No webhook URL configured, skipping delivery");
                return Ok(Outcome::Skipped);
            }
        };

        let message = self.build_message(&summary);

        if self.dry_run {
            tracing::debug!("Dry run, not posting to webhook");
            return Ok(Outcome::DryRun(message));
        }

        connect(url).deliver(&message).await.map_err(|e| match e {
            Error::DeliveryFailed(_) => e,
            other => Error::DeliveryFailed(other.to_string()),
        })?;

        tracing::info!(
            tests = summary.total_tests,
            failures = summary.failed,
            "Notification delivered"
        );
        Ok(Outcome::Delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::{EnvironmentContext, MessageSettings};
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    const PASSING_REPORT: &str = r#"{"stats":{"tests":10,"passes":10,"failures":0,"pending":0,"passPercent":100,"duration":60000}}"#;

    /// Records every delivery; optionally fails them
    #[derive(Clone, Default)]
    struct RecordingWebhook {
        sent: Arc<Mutex<Vec<(String, NotificationMessage)>>>,
        fail: bool,
    }

    struct Bound {
        url: String,
        inner: RecordingWebhook,
    }

    #[async_trait]
    impl Webhook for Bound {
        async fn deliver(&self, message: &NotificationMessage) -> Result<()> {
            self.inner
                .sent
                .lock()
                .unwrap()
                .push((self.url.clone(), message.clone()));
            if self.inner.fail {
                return Err(Error::DeliveryFailed("connection reset by peer".to_string()));
            }
            Ok(())
        }
    }

    impl RecordingWebhook {
        fn connector(&self) -> impl FnOnce(String) -> Bound {
            let inner = self.clone();
            move |url| Bound { url, inner }
        }

        fn calls(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    fn config(report_path: &Path, webhook_url: Option<&str>) -> NotifierConfig {
        NotifierConfig {
            report_path: report_path.to_path_buf(),
            webhook_url: webhook_url.map(str::to_string),
            context: EnvironmentContext::default(),
            message: MessageSettings::default(),
        }
    }

    fn write_report(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("index.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_delivers_once() {
        let dir = tempfile::tempdir().unwrap();
        let report = write_report(&dir, PASSING_REPORT);
        let webhook = RecordingWebhook::default();

        let notifier = Notifier::new(config(&report, Some("https://hooks.example.com/x")));
        let result = notifier.run_with(webhook.connector()).await;

        assert_eq!(result.as_ref().unwrap(), &Outcome::Delivered);
        assert_eq!(exit_code(&result), 0);

        let sent = webhook.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "https://hooks.example.com/x");
        assert!(sent[0].1.text.contains("PASSED"));
    }

    #[tokio::test]
    async fn test_missing_report_is_fatal_without_delivery() {
        let dir = tempfile::tempdir().unwrap();
        let webhook = RecordingWebhook::default();

        let notifier = Notifier::new(config(
            &dir.path().join("missing.json"),
            Some("https://hooks.example.com/x"),
        ));
        let result = notifier.run_with(webhook.connector()).await;

        assert!(matches!(result, Err(Error::MissingArtifact { .. })));
        assert_eq!(exit_code(&result), 1);
        assert_eq!(webhook.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_webhook_skips() {
        let dir = tempfile::tempdir().unwrap();
        let report = write_report(&dir, PASSING_REPORT);
        let webhook = RecordingWebhook::default();

        let notifier = Notifier::new(config(&report, None));
        let result = notifier.run_with(webhook.connector()).await;

        assert_eq!(result.as_ref().unwrap(), &Outcome::Skipped);
        assert_eq!(exit_code(&result), 0);
        assert_eq!(webhook.calls(), 0);
    }

    #[tokio::test]
    async fn test_delivery_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let report = write_report(&dir, PASSING_REPORT);
        let webhook = RecordingWebhook {
            fail: true,
            ..Default::default()
        };

        let notifier = Notifier::new(config(&report, Some("https://hooks.example.com/x")));
        let result = notifier.run_with(webhook.connector()).await;

        match &result {
            Err(Error::DeliveryFailed(reason)) => assert!(reason.contains("connection reset")),
            other => panic!("Expected DeliveryFailed, got {other:?}"),
        }
        assert_eq!(exit_code(&result), 1);
        assert_eq!(webhook.calls(), 1);
    }

    #[tokio::test]
    async fn test_dry_run_builds_without_delivery() {
        let dir = tempfile::tempdir().unwrap();
        let report = write_report(&dir, PASSING_REPORT);
        let webhook = RecordingWebhook::default();

        let notifier =
            Notifier::new(config(&report, Some("https://hooks.example.com/x"))).dry_run(true);
        let result = notifier.run_with(webhook.connector()).await;

        match result.unwrap() {
            Outcome::DryRun(message) => assert!(message.text.contains("Total:* 10")),
            other => panic!("Expected DryRun, got {other:?}"),
        }
        assert_eq!(webhook.calls(), 0);
    }

    #[test]
    fn test_preview_ignores_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let report = write_report(&dir, PASSING_REPORT);

        let notifier = Notifier::new(config(&report, None));
        match notifier.preview().unwrap() {
            Outcome::Previewed(message) => {
                assert!(message.text.contains("Duration:* 1.00 min"));
            }
            other => panic!("Expected Previewed, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_target_endpoint() {
        let path = Path::new("index.json");
        assert_eq!(
            Notifier::new(config(path, None)).resolve_target_endpoint(),
            Endpoint::Skipped
        );
        assert_eq!(
            Notifier::new(config(path, Some("https://hooks.example.com/x")))
                .resolve_target_endpoint(),
            Endpoint::Url("https://hooks.example.com/x".to_string())
        );
    }
}
