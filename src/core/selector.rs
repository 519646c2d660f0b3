// ─── Runtime Selector ───
// One boot of the container:
//   fresh jar (no or stale decision checksum) -> prompt -> decided
//   known jar                                  -> decided
// then an override file, if any, beats the detected runtime.

use std::io::Write;
use std::path::Path;

use tracing::{error, info, warn};

use crate::core::archive::JarArchive;
use crate::core::config::{OutputMode, SelectorConfig};
use crate::core::error::{SelectorError, SelectorResult};
use crate::core::java::{resolve_runtime_name, RuntimeName};
use crate::core::prompt::{ask_for_runtime, PromptChoice, PromptInput};
use crate::core::startup::StartupCommand;
use crate::core::state::{DecisionStore, JarChecksum, DECISION_FILE};

/// Outcome of one selection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Detected from the jar, or the default when detection failed.
    Detected(RuntimeName),
    Overridden(RuntimeName),
    /// The override file holds something that is not a known runtime.
    InvalidOverride(String),
}

/// Runs the full selection and prints the result for `config.mode`.
///
/// Failures reading the jar or the decision files are reported as a fallback
/// to the default runtime; only a broken `out` surfaces as an error.
pub async fn select_runtime<I, W>(
    config: &SelectorConfig,
    input: &mut I,
    out: &mut W,
) -> std::io::Result<()>
where
    I: PromptInput + ?Sized,
    W: Write + ?Sized,
{
    let startup = StartupCommand::new(config.startup.as_str());
    let Some(jar) = startup.jar_path() else {
        info!("No jar in startup command");
        return match config.mode {
            OutputMode::Echo => writeln!(
                out,
                "No jar detected in startup arguments - not enforcing java."
            ),
            OutputMode::Env => writeln!(out, "{}", startup.as_str()),
        };
    };

    let jar_path = config.work_dir.join(jar);
    let store = DecisionStore::new(&config.work_dir);

    match decide(config, &store, &jar_path, input, out).await {
        Ok(decision) => report(config, &startup, &decision, out),
        Err(e) => {
            match &e {
                SelectorError::InternalConsistency(_) => error!("{}", e),
                _ => warn!("Falling back to {}: {}", config.default_runtime, e),
            }
            report_fallback(config, &startup, out)
        }
    }
}

async fn decide<I, W>(
    config: &SelectorConfig,
    store: &DecisionStore,
    jar_path: &Path,
    input: &mut I,
    out: &mut W,
) -> SelectorResult<Decision>
where
    I: PromptInput + ?Sized,
    W: Write + ?Sized,
{
    let checksum = JarChecksum::of_file(jar_path)?;
    let detected = {
        let mut archive = JarArchive::open(jar_path)?;
        resolve_runtime_name(&mut archive).unwrap_or(config.default_runtime)
    };

    if store.needs_prompt(&checksum)? {
        if config.mode != OutputMode::Echo {
            return Err(SelectorError::InternalConsistency(format!(
                "no decision recorded for jar {checksum}, prompting is only possible in echo mode"
            )));
        }

        match ask_for_runtime(detected, config.prompt_timeout, input, out).await? {
            PromptChoice::Detected => store.clear_override()?,
            PromptChoice::Runtime(name) => store.write_override(name)?,
        }
        // Expired prompts are recorded too, so the detected runtime sticks.
        store.record_decision(&checksum)?;
    }

    let decision = match store.read_override()? {
        Some(raw) => match raw.parse::<RuntimeName>() {
            Ok(name) => Decision::Overridden(name),
            Err(_) => Decision::InvalidOverride(raw),
        },
        None => Decision::Detected(detected),
    };
    info!("Decided {:?} for jar {}", decision, checksum);
    Ok(decision)
}

fn report<W: Write + ?Sized>(
    config: &SelectorConfig,
    startup: &StartupCommand,
    decision: &Decision,
    out: &mut W,
) -> std::io::Result<()> {
    let runtime = match decision {
        Decision::Detected(name) | Decision::Overridden(name) => *name,
        Decision::InvalidOverride(_) => config.default_runtime,
    };

    match config.mode {
        OutputMode::Env => writeln!(out, "{}", startup.with_entrypoint(runtime.entrypoint())),
        OutputMode::Echo => {
            match decision {
                Decision::Detected(name) => {
                    writeln!(out, "Detected java version as '{}' automatically.", name)?
                }
                Decision::Overridden(name) => writeln!(
                    out,
                    "Detected java version being overwritten, using '{}'...",
                    name
                )?,
                Decision::InvalidOverride(raw) => writeln!(
                    out,
                    "Detected invalid java version '{}', defaulting back to '{}'...",
                    raw, config.default_runtime
                )?,
            }
            writeln!(
                out,
                "This choice can be reset by deleting the '{}' file.",
                DECISION_FILE
            )
        }
    }
}

fn report_fallback<W: Write + ?Sized>(
    config: &SelectorConfig,
    startup: &StartupCommand,
    out: &mut W,
) -> std::io::Result<()> {
    match config.mode {
        OutputMode::Echo => writeln!(
            out,
            "Couldn't detect jar version - defaulting to '{}'.",
            config.default_runtime
        ),
        OutputMode::Env => writeln!(
            out,
            "{}",
            startup.with_entrypoint(config.default_runtime.entrypoint())
        ),
    }
}
