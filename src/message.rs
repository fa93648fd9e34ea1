//! Notification message construction
//!
//! Everything here is pure: the same summary, context and settings always
//! produce byte-identical output.

use serde::Serialize;

use crate::common::config::{EnvironmentContext, MessageSettings};
use crate::report::TestRunSummary;

/// Overall outcome of a test run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Passed,
    Failed,
}

impl Status {
    /// `Failed` iff at least one test failed
    pub fn of(summary: &TestRunSummary) -> Self {
        if summary.has_failures() {
            Status::Failed
        } else {
            Status::Passed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Passed => "PASSED",
            Status::Failed => "FAILED",
        }
    }

    /// Slack emoji shown next to the title
    pub fn glyph(self) -> &'static str {
        match self {
            Status::Passed => ":white_check_mark:",
            Status::Failed => ":warning:",
        }
    }
}

/// Webhook payload: formatted text plus sender metadata
///
/// Serializes to `{ channel, username, text, icon_emoji }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub channel: String,
    pub username: String,
    pub text: String,
    pub icon_emoji: String,
}

/// Floor of the pass rate with a trailing `%`
pub fn format_pass_percent(pass_percent: f64) -> String {
    format!("{}%", pass_percent.floor() as i64)
}

/// Milliseconds as minutes with two decimals
///
/// An exact halfway value rounds up (`7500` ms is `0.13 min`). Every other
/// value rounds to the nearest hundredth of its `f64` minutes.
pub fn format_duration(duration_ms: u64) -> String {
    // Halfway hundredths are only exact in binary at odd multiples of 7.5s
    if duration_ms % 15_000 == 7_500 {
        let hundredths = (duration_ms * 100 + 30_000) / 60_000;
        return format!("{}.{:02} min", hundredths / 100, hundredths % 100);
    }
    format!("{:.2} min", duration_ms as f64 / 1_000.0 / 60.0)
}

/// Build the notification for a finished run
pub fn build_message(
    summary: &TestRunSummary,
    context: &EnvironmentContext,
    settings: &MessageSettings,
) -> NotificationMessage {
    let status = Status::of(summary);

    let text = format!(
        "*{title} {glyph}*\n\
         *Status:* {status} | *Total:* {total} | *Passed:* {passed} | *Failed:* {failed} | \
         *Skipped:* {skipped} | *Pass %:* {percent} | *Duration:* {duration}\n\
         *Browser:* {browser} | *Viewport:* {viewport} | *Run By:* {run_by}",
        title = settings.title,
        glyph = status.glyph(),
        status = status.label(),
        total = summary.total_tests,
        passed = summary.passed,
        failed = summary.failed,
        skipped = summary.pending,
        percent = format_pass_percent(summary.pass_percent),
        duration = format_duration(summary.duration_ms),
        browser = context.browser,
        viewport = context.viewport,
        run_by = context.run_by,
    );

    NotificationMessage {
        channel: settings.channel.clone(),
        username: settings.username.clone(),
        text,
        icon_emoji: settings.icon_emoji.clone(),
    }
}
