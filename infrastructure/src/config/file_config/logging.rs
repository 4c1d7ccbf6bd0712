//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL conversation log path (`~` is expanded). Disabled when unset.
    pub conversation_log: Option<String>,
    /// Directory for rolling diagnostic log files. Disabled when unset.
    pub log_dir: Option<String>,
}
