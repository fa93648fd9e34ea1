//! Report and configuration paths

use std::path::PathBuf;

/// Name used for the configuration directory
const APP_NAME: &str = "report-notifier";

/// Where cypress-mochawesome-reporter writes its JSON summary, relative to
/// the project root
pub const DEFAULT_REPORT_PATH: &str = "cypress/reports/html/index.json";

/// Get the default report path, resolved against the working directory
pub fn default_report_path() -> PathBuf {
    std::env::current_dir()
        .map(|dir| dir.join(DEFAULT_REPORT_PATH))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_REPORT_PATH))
}

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/report-notifier/`
/// - macOS: `~/Library/Application Support/report-notifier/`
/// - Windows: `%APPDATA%\report-notifier\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_path_ends_with_index_json() {
        let path = default_report_path();
        assert!(path.ends_with("cypress/reports/html/index.json"));
    }

    #[test]
    fn test_config_path_is_toml() {
        if let Some(path) = config_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.toml"));
        }
    }
}
