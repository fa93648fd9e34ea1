//! Mochawesome report loading
//!
//! Only the `stats` block of the merged report is read; suites, tests and
//! timestamps are ignored.

use serde::Deserialize;
use std::path::Path;

use crate::common::{Error, Result};

/// Counters from a finished test run
///
/// The counters are independent: `total_tests` is not required to equal
/// `passed + failed + pending`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TestRunSummary {
    #[serde(rename = "tests")]
    pub total_tests: u64,
    #[serde(rename = "passes")]
    pub passed: u64,
    #[serde(rename = "failures")]
    pub failed: u64,
    pub pending: u64,
    /// Pass rate in [0, 100]
    #[serde(rename = "passPercent")]
    pub pass_percent: f64,
    #[serde(rename = "duration")]
    pub duration_ms: u64,
}

#[derive(Deserialize)]
struct ReportDocument {
    stats: TestRunSummary,
}

impl TestRunSummary {
    /// Parse a summary from the text of a Mochawesome JSON report
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<ReportDocument>(content).map(|doc| doc.stats)
    }

    /// Whether any test failed
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Read and parse the report at `path`
///
/// The file is read fully and closed before parsing.
pub fn load_summary(path: &Path) -> Result<TestRunSummary> {
    if !path.exists() {
        return Err(Error::missing_artifact(path));
    }

    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let summary =
        TestRunSummary::from_json(&content).map_err(|e| Error::invalid_artifact(path, e))?;

    tracing::debug!(
        path = %path.display(),
        tests = summary.total_tests,
        failures = summary.failed,
        "Loaded test run summary"
    );

    Ok(summary)
}
