//! Configuration file loading for prague-guide
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PRAGUE_GUIDE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./prague-guide.toml` or `./.prague-guide.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/prague-guide/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FALLBACK_API_KEY_ENV, FileConfig, FileGeminiConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig, Severity, expand_tilde,
};
pub use loader::ConfigLoader;
