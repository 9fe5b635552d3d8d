//! Console client configuration.
use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;
use runtime::RuntimeConfig;

/// Settings of the terminal client, separate from the runtime's.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Emit ANSI colours.
    pub color: bool,
    /// Directory that receives `textract.log`.
    pub log_dir: PathBuf,
    pub runtime: RuntimeConfig,
}

impl CliConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TEXTRACT_NO_COLOR` - Disable colours when set to anything but `0`/`false`
    /// - `NO_COLOR` - Same, following the informal convention
    /// - `TEXTRACT_LOG_DIR` - Log directory (default: platform cache dir)
    ///
    /// Runtime settings come from [`RuntimeConfig::from_env`].
    pub fn from_env() -> Self {
        let mut config = Self {
            runtime: RuntimeConfig::from_env(),
            ..Self::default()
        };

        if flag_set("TEXTRACT_NO_COLOR") || env::var_os("NO_COLOR").is_some() {
            config.color = false;
        }
        if let Some(dir) = env::var_os("TEXTRACT_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            color: true,
            log_dir: default_log_dir(),
            runtime: RuntimeConfig::default(),
        }
    }
}

/// Platform cache directory for logs, e.g. `~/.cache/textract/logs` on Linux.
pub fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", "textract")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn flag_set(key: &str) -> bool {
    parse_flag(env::var(key).ok().as_deref())
}

fn parse_flag(value: Option<&str>) -> bool {
    match value {
        Some(value) => !matches!(value.trim(), "" | "0" | "false" | "no"),
        None => false,
    }
}
