use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::core::config::{
    startup_from_env, OutputMode, SelectorConfig, DEFAULT_PROMPT_TIMEOUT_SECS,
};

/// Picks the Java runtime for the server jar named in the startup command.
///
/// The startup command is read from `MODIFIED_STARTUP`, or `STARTUP` when
/// that is unset.
#[derive(Debug, Parser)]
#[command(name = "java-selector", version, about)]
pub struct Cli {
    /// `echo` prints the decision (and prompts on first boot), `env` prints
    /// the rewritten startup command.
    #[arg(long, value_enum, default_value_t = OutputMode::Echo)]
    pub mode: OutputMode,

    /// Directory the jar path and decision files are relative to.
    #[arg(long, default_value = ".")]
    pub work_dir: PathBuf,

    /// Seconds to wait for an answer before keeping the detected runtime.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_PROMPT_TIMEOUT_SECS)]
    pub prompt_timeout: u64,
}

impl Cli {
    pub fn into_config(self) -> SelectorConfig {
        SelectorConfig {
            work_dir: self.work_dir,
            prompt_timeout: Duration::from_secs(self.prompt_timeout),
            ..SelectorConfig::new(self.mode, startup_from_env())
        }
    }
}
