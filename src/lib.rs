mod cli;
pub mod core;

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::core::prompt::StdinInput;
use crate::core::selector::select_runtime;

pub async fn run() {
    // Logs go to stderr; stdout is the command line in env mode.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config();
    tracing::debug!("Selecting runtime with {:?}", config);

    let mut input = StdinInput::new();
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = select_runtime(&config, &mut input, &mut stdout).await {
        tracing::error!("Couldn't write selection: {}", e);
    }
    if let Err(e) = stdout.flush() {
        tracing::error!("Couldn't flush selection: {}", e);
    }
}
