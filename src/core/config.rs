use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::java::RuntimeName;

/// Primary source of the startup command.
pub const STARTUP_ENV: &str = "MODIFIED_STARTUP";
/// Used when `MODIFIED_STARTUP` is not set.
pub const FALLBACK_STARTUP_ENV: &str = "STARTUP";
pub const DEFAULT_PROMPT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Print a human-readable decision, prompting when needed.
    #[default]
    Echo,
    /// Print the startup command rewritten to use the chosen runtime.
    Env,
}

#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub mode: OutputMode,
    pub startup: String,
    /// Base for a relative jar path and for both decision files.
    pub work_dir: PathBuf,
    pub prompt_timeout: Duration,
    pub default_runtime: RuntimeName,
}

impl SelectorConfig {
    pub fn new(mode: OutputMode, startup: impl Into<String>) -> Self {
        Self {
            mode,
            startup: startup.into(),
            work_dir: PathBuf::from("."),
            prompt_timeout: Duration::from_secs(DEFAULT_PROMPT_TIMEOUT_SECS),
            default_runtime: RuntimeName::default(),
        }
    }
}

/// Startup command from the environment. A set-but-empty variable still wins.
pub fn startup_from_env() -> String {
    startup_from(|name| std::env::var_os(name))
}

fn startup_from(lookup: impl Fn(&str) -> Option<OsString>) -> String {
    lookup(STARTUP_ENV)
        .or_else(|| lookup(FALLBACK_STARTUP_ENV))
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_default()
}
