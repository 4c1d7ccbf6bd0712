//! Gemini API configuration from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};

/// Env var consulted when the configured one is unset
pub const FALLBACK_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL of the Generative Language API.
    pub base_url: String,
    /// Model used for every request.
    pub model: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl FileGeminiConfig {
    /// Resolve the API key from the process environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key using `lookup` for environment variables.
    ///
    /// Order: direct `api_key`, then `api_key_env`, then `GEMINI_API_KEY`.
    /// Blank values count as absent.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |value: String| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        self.api_key
            .clone()
            .and_then(non_blank)
            .or_else(|| lookup(&self.api_key_env).and_then(non_blank))
            .or_else(|| {
                if self.api_key_env == FALLBACK_API_KEY_ENV {
                    None
                } else {
                    lookup(FALLBACK_API_KEY_ENV).and_then(non_blank)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FileGeminiConfig::default();
        assert_eq!(config.api_key_env, "API_KEY");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_direct_key_wins() {
        let config = FileGeminiConfig {
            api_key: Some("direct".to_string()),
            ..Default::default()
        };
        let key = config.resolve_api_key_with(env(&[("API_KEY", "from-env")]));
        assert_eq!(key.as_deref(), Some("direct"));
    }

    #[test]
    fn test_direct_key_needs_no_environment() {
        let config = FileGeminiConfig {
            api_key: Some(" direct ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("direct"));
    }

    #[test]
    fn test_configured_env_var() {
        let config = FileGeminiConfig::default();
        let key = config.resolve_api_key_with(env(&[
            ("API_KEY", "primary"),
            ("GEMINI_API_KEY", "secondary"),
        ]));
        assert_eq!(key.as_deref(), Some("primary"));
    }

    #[test]
    fn test_falls_back_to_gemini_env_var() {
        let config = FileGeminiConfig::default();
        let key = config.resolve_api_key_with(env(&[("API_KEY", "  "), ("GEMINI_API_KEY", "g")]));
        assert_eq!(key.as_deref(), Some("g"));
    }

    #[test]
    fn test_no_key_anywhere() {
        let config = FileGeminiConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(config.resolve_api_key_with(env(&[])).is_none());
    }
}
