//! Configuration handling
//!
//! Values are layered, highest priority first: command-line flags,
//! environment variables, the optional TOML file, built-in defaults.
//! The resolved [`NotifierConfig`] is passed explicitly into the notifier.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::paths::{config_path, default_report_path};
use super::Result;

/// Environment variable overriding the report path
pub const ENV_REPORT_PATH: &str = "MOCHAWESOME_REPORT_PATH";
/// Environment variable holding the webhook URL
pub const ENV_WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";
/// Environment variable naming the CI actor
pub const ENV_GITHUB_ACTOR: &str = "GITHUB_ACTOR";
/// Fallback actor variable for local runs
pub const ENV_USER: &str = "USER";
/// Environment variable naming the browser under test
pub const ENV_BROWSER: &str = "BROWSER";
/// Environment variable holding the viewport string
pub const ENV_VIEWPORT: &str = "VIEWPORT";

/// Configuration file structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Message appearance and sender metadata
    #[serde(default)]
    pub message: MessageSettings,

    /// Fallbacks for environment values
    #[serde(default)]
    pub defaults: Defaults,
}

/// Message title and sender metadata
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MessageSettings {
    /// Heading shown on the first line of the message
    #[serde(default = "default_title")]
    pub title: String,

    /// Target channel
    #[serde(default = "default_channel")]
    pub channel: String,

    /// Bot display name
    #[serde(default = "default_username")]
    pub username: String,

    /// Bot icon emoji
    #[serde(default = "default_icon")]
    pub icon_emoji: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            channel: default_channel(),
            username: default_username(),
            icon_emoji: default_icon(),
        }
    }
}

fn default_title() -> String {
    "SauceDemo Cypress Test Results".to_string()
}
fn default_channel() -> String {
    "#engineering-tests-results".to_string()
}
fn default_username() -> String {
    "SauceDemo Test Bot".to_string()
}
fn default_icon() -> String {
    ":robot_face:".to_string()
}

/// Fallbacks used when the matching environment variable is unset
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Defaults {
    #[serde(default = "default_browser")]
    pub browser: String,

    #[serde(default = "default_viewport")]
    pub viewport: String,

    #[serde(default = "default_run_by")]
    pub run_by: String,

    /// Report path used when neither the flag nor the environment set one
    #[serde(default)]
    pub report_path: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            browser: default_browser(),
            viewport: default_viewport(),
            run_by: default_run_by(),
            report_path: None,
        }
    }
}

fn default_browser() -> String {
    "chrome".to_string()
}
fn default_viewport() -> String {
    "1280x720".to_string()
}
fn default_run_by() -> String {
    "Unknown".to_string()
}

impl Config {
    /// Load configuration from an explicit file, or from the default
    /// location
    ///
    /// An explicit path must exist. The default file is optional and
    /// defaults are returned when it is absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match config_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| super::Error::ConfigParse(e.to_string()))
    }
}

/// Ambient values describing where the tests ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentContext {
    pub browser: String,
    pub viewport: String,
    pub run_by: String,
}

impl Default for EnvironmentContext {
    fn default() -> Self {
        Self {
            browser: default_browser(),
            viewport: default_viewport(),
            run_by: default_run_by(),
        }
    }
}

/// Fully resolved notifier configuration
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Path to the Mochawesome JSON summary
    pub report_path: PathBuf,
    /// Webhook destination; `None` means the run is skipped
    pub webhook_url: Option<String>,
    pub context: EnvironmentContext,
    pub message: MessageSettings,
}

impl NotifierConfig {
    /// Resolve configuration from the process environment
    pub fn from_env(file: Config) -> Self {
        Self::from_lookup(file, |key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary variable lookup
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(file: Config, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let report_path = var(ENV_REPORT_PATH)
            .map(PathBuf::from)
            .or(file.defaults.report_path)
            .unwrap_or_else(default_report_path);

        let context = EnvironmentContext {
            browser: var(ENV_BROWSER).unwrap_or(file.defaults.browser),
            viewport: var(ENV_VIEWPORT).unwrap_or(file.defaults.viewport),
            run_by: var(ENV_GITHUB_ACTOR)
                .or_else(|| var(ENV_USER))
                .unwrap_or(file.defaults.run_by),
        };

        Self {
            report_path,
            webhook_url: var(ENV_WEBHOOK_URL),
            context,
            message: file.message,
        }
    }

    /// Apply a command-line report path override
    pub fn with_report_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.report_path = path;
        }
        self
    }

    /// Apply a command-line webhook URL override
    pub fn with_webhook_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.webhook_url = Some(url);
        }
        self
    }
}
