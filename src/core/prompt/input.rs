use std::io::BufRead;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// A source of answers for the runtime prompt.
#[async_trait]
pub trait PromptInput: Send {
    /// Next line of input, or `None` if nothing arrived within `timeout`
    /// or the input is closed.
    async fn read_line(&mut self, timeout: Duration) -> Option<String>;
}

/// Reads answers from the process's standard input.
///
/// Blocking reads happen on a detached thread that feeds a channel, so a
/// timed-out read never holds up the rest of the run or process exit.
#[derive(Default)]
pub struct StdinInput {
    lines: Option<mpsc::UnboundedReceiver<String>>,
}

impl StdinInput {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PromptInput for StdinInput {
    async fn read_line(&mut self, timeout: Duration) -> Option<String> {
        let lines = self.lines.get_or_insert_with(spawn_stdin_reader);
        match tokio::time::timeout(timeout, lines.recv()).await {
            Ok(line) => line,
            Err(_) => {
                debug!("No input within {:?}", timeout);
                None
            }
        }
    }
}

fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    let spawned = std::thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        debug!("stdin closed: {}", e);
                        break;
                    }
                }
            }
        });

    // A failed spawn drops `tx`, which reads as closed input.
    if let Err(e) = spawned {
        warn!("Couldn't start stdin reader: {}", e);
    }
    rx
}
