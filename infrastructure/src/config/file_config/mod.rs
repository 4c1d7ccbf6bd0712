//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod gemini;
mod logging;
mod output;
mod repl;

pub use gemini::{FALLBACK_API_KEY_ENV, FileGeminiConfig};
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini API settings
    pub gemini: FileGeminiConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found while validating [`FileConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending field, e.g. `gemini.model`
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.gemini.model.trim().is_empty() {
            issues.push(ConfigIssue::error("gemini.model", "model name is empty"));
        }

        let base_url = self.gemini.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigIssue::error("gemini.base_url", "base URL is empty"));
        } else if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            issues.push(ConfigIssue::error(
                "gemini.base_url",
                format!("'{}' is not an http(s) URL", base_url),
            ));
        } else if base_url.starts_with("http://") {
            issues.push(ConfigIssue::warning(
                "gemini.base_url",
                "plain http sends the API key unencrypted",
            ));
        }

        if self.gemini.api_key.is_some() {
            issues.push(ConfigIssue::warning(
                "gemini.api_key",
                format!(
                    "API key stored in config file; prefer the {} environment variable",
                    self.gemini.api_key_env
                ),
            ));
        }

        if self.gemini.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "gemini.api_key_env",
                "empty variable name; only GEMINI_API_KEY will be consulted",
            ));
        }

        issues
    }

    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }

    pub fn history_path(&self) -> Option<PathBuf> {
        self.repl.history_file.as_deref().map(expand_tilde)
    }

    pub fn conversation_log_path(&self) -> Option<PathBuf> {
        self.logging.conversation_log.as_deref().map(expand_tilde)
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.logging.log_dir.as_deref().map(expand_tilde)
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
api_key_env = "PRAGUE_KEY"
model = "gemini-2.0-flash"

[output]
format = "text"
color = false

[repl]
show_progress = false
history_file = "/tmp/prague-history.txt"

[logging]
conversation_log = "/tmp/prague.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.gemini.api_key_env, "PRAGUE_KEY");
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(
            config.gemini.base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.output.format, Some(FileOutputFormat::Text));
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/prague-history.txt"))
        );
        assert_eq!(
            config.conversation_log_path(),
            Some(PathBuf::from("/tmp/prague.jsonl"))
        );
        assert!(config.log_dir().is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.gemini, FileGeminiConfig::default());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_model_and_bad_url() {
        let mut config = FileConfig::default();
        config.gemini.model = "  ".to_string();
        config.gemini.base_url = "ftp://example.com".to_string();

        let issues = config.validate();
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["gemini.model", "gemini.base_url"]);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
        assert!(config.has_errors());
    }

    #[test]
    fn test_validate_warns_on_inline_key_and_plain_http() {
        let mut config = FileConfig::default();
        config.gemini.api_key = Some("secret".to_string());
        config.gemini.base_url = "http://localhost:8080".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(!config.has_errors());
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/x.txt"), home.join("x.txt"));
        }
    }

    #[test]
    fn test_issue_display() {
        let issue = ConfigIssue::error("gemini.model", "model name is empty");
        assert_eq!(issue.to_string(), "gemini.model: model name is empty");
    }
}
